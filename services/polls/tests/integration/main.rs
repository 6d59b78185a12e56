mod helpers;

mod vote_test;
