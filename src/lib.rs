//! Workspace-level integration tests for fibseq.
