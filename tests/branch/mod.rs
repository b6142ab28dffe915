mod create_branch_copies_history;
mod create_existing_branch_fails;
mod list_branches_marks_current;
