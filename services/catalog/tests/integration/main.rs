mod helpers;

mod catalog_test;
mod loan_test;
mod renewal_test;
