//! # pref-api
//!
//! Client side of the course-preference REST backend.
//!
//! - [`http`]: request wrapper with optional bearer auth and a clear split
//!   between transport failures and non-2xx answers
//! - [`resources`]: one generic controller (load, render, filter, create,
//!   remove) instantiated for students, courses, packs, preferences, grades
//! - [`screen`]: named sections, rendered views, notices, request generations
//! - [`App`]: owns all of the above; `show` routes between sections
//! - [`dashboard`], [`services`], [`monitor`]: read-only panels

pub mod app;
pub mod auth;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod http;
pub mod monitor;
pub mod resources;
pub mod router;
pub mod screen;
pub mod services;

pub use app::App;
pub use error::ApiError;
pub use http::{ApiClient, ApiRequest, ApiResponse};
pub use resources::{AutoConfirm, Confirm, RemoveOutcome, RenderedList, ResourceController};
pub use router::{NavEntry, NavTarget};
pub use screen::{Notice, NoticeKind, Screen, Section, Slot, View};
