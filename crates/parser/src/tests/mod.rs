// Test module for parser
//
// Unit tests for descriptor parsing, grouped by syntax form.
