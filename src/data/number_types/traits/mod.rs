pub mod factorization;
