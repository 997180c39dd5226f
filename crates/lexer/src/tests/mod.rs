// Test module for lexer
//
// Unit tests for the descriptor lexer, grouped by token category.
