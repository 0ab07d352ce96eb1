// handlers/mod.rs - two security tiers
//
// Public (no auth): /, /health, /api/auth/*
// Protected (bearer token required): /api/pokemon/**
pub mod public;
pub mod protected;
