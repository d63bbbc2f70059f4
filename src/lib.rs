//! A small web app for startup elevator pitches: fill in a form (or hit the
//! JSON API), get back a shareable one-paragraph blurb stitched together
//! from the pitch, an authority statement, and a metrics line.
//!
//! The pieces:
//! - `domain` is the single validation schema; the form page renders its
//!   bounds as html attributes and the server re-checks them on every path
//! - `persistence` is the thin CRD layer over postgres
//! - `routes` has the browser pages and the `/api` JSON handlers
//! - posting via the browser needs a (cookie) session; reading never does

pub mod authentication;
pub mod blurb;
pub mod configuration;
pub mod domain;
pub mod persistence;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod utils;
