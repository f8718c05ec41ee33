//! Host-based scenario tests for the Hall counter node
//! These tests run on the development machine, not on the ESP32: the whole
//! node is wired up the way `main` does it, with in-memory collaborators.
