// Codegen Test Modules

mod signature_tests;
