//! Registrar and bootstrap tests

mod registrar_test;
