mod check_tests;
