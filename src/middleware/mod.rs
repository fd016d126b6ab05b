/*
 * Responsibility
 * - Public interface of the middleware layer
 */
pub mod bearer_auth;
pub mod cors;
pub mod http;
