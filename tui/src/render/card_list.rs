use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Items drawn as variable-height cards in a scrolling column.
pub(crate) trait CardSource {
    fn len(&self) -> usize;
    fn card_height(&self, index: usize, width: u16) -> u16;
    fn render_card(&self, index: usize, area: Rect, buf: &mut Buffer, selected: bool);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selection and scroll offset for a [`CardSource`]. Only the cards that fit
/// in the viewport are drawn.
#[derive(Debug, Default)]
pub(crate) struct CardListState {
    first_visible: usize,
    selected: usize,
}

impl CardListState {
    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection by `delta`, clamped to the list bounds.
    pub(crate) fn move_selection<S: CardSource>(&mut self, source: &S, delta: isize) {
        if source.is_empty() {
            self.selected = 0;
            return;
        }
        let max_index = source.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(max_index);
    }

    /// Keep the selection inside the list after it shrinks.
    pub(crate) fn clamp<S: CardSource>(&mut self, source: &S) {
        self.move_selection(source, 0);
        self.first_visible = self.first_visible.min(self.selected);
    }

    pub(crate) fn render<S: CardSource>(&mut self, source: &S, area: Rect, buf: &mut Buffer) {
        self.clamp(source);
        self.scroll_to_selection(source, area);
        let mut y = area.y;
        for index in self.first_visible..source.len() {
            if y >= area.bottom() {
                break;
            }
            let height = source
                .card_height(index, area.width)
                .max(1)
                .min(area.bottom() - y);
            source.render_card(
                index,
                Rect::new(area.x, y, area.width, height),
                buf,
                index == self.selected,
            );
            y += height;
        }
    }

    /// Number of cards that fit in `area` starting at the first visible one.
    pub(crate) fn page_step<S: CardSource>(&self, source: &S, area: Rect) -> usize {
        let mut used: u16 = 0;
        let mut count = 0;
        for index in self.first_visible..source.len() {
            used = used.saturating_add(source.card_height(index, area.width).max(1));
            if used > area.height {
                break;
            }
            count += 1;
        }
        count.max(1)
    }

    fn scroll_to_selection<S: CardSource>(&mut self, source: &S, area: Rect) {
        if area.height == 0 || source.is_empty() {
            self.first_visible = 0;
            return;
        }
        if self.selected < self.first_visible {
            self.first_visible = self.selected;
            return;
        }
        while self.first_visible < self.selected
            && self.span_height(source, area.width) > area.height
        {
            self.first_visible += 1;
        }
    }

    /// Height from the first visible card through the selected one.
    fn span_height<S: CardSource>(&self, source: &S, width: u16) -> u16 {
        (self.first_visible..=self.selected)
            .map(|index| source.card_height(index, width).max(1))
            .fold(0u16, u16::saturating_add)
    }
}
