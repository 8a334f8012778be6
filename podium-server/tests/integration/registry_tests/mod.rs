mod test_leave_idempotent;
