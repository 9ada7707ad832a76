mod helpers;
mod index_test;
