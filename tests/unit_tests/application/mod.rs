mod job_poller_test;
