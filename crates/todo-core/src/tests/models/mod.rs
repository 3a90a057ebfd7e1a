mod task_edit;
