mod commands_run_in_process;
