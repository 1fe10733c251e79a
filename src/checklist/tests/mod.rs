//! Unit tests for the checklist domain and services.
