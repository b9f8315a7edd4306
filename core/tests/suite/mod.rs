mod users_workflow;
