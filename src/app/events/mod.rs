//! DrawIntent- und DrawCommand-Enums für den Intent/Command-Datenfluss,
//! plus das Pointer-Event des Hosts.

mod command;
mod intent;
mod pointer;

pub use command::DrawCommand;
pub use intent::DrawIntent;
pub use pointer::{PointerEvent, PointerKind};
