mod all;
mod filters;
mod footer;
mod header;
mod input;
mod log;
mod messages;
mod tasks;

use self::log::log;
use super::*;
use filters::filters;
use footer::footer;
use header::header;
use input::input;
use messages::messages;
use tasks::tasks;

pub use all::all as render;
