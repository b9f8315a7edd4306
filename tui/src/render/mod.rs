pub(crate) mod card_list;
