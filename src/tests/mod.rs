mod player_repository_tests;
