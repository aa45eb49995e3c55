/*!
# Tabletop Mods

Core of the tabletop mod subsystem: loads user-authored game kits (dice,
decks, tokens, boards) from JSON descriptions and prepares them for a shared
session.

This crate is platform-agnostic. Resource decoding and the live scene are
collaborators behind traits; a filesystem resource loader lives in
`tabletop_mods_fs`.

## Architecture

- **AssetRegistry**: Path sandboxing, resource caches and the
  session-consistent string id table
- **Asset**: Dice, Deck, Board, Prefab and BuiltinToken variants sharing one
  capability set
- **SpawnPlanner**: Singleton and grid placement of spawn rules
- **ModLoader**: JSON mod descriptions into `Mod` values
- **Session**: Mod switching and spawning for one participant
*/

// Internal modules
mod error;
mod session;
pub mod log;
pub mod config;
pub mod registry;
pub mod resource;
pub mod asset;
pub mod scene;
pub mod spawn;
pub mod loader;
pub mod replication;

// Main tabletop namespace module
pub mod tabletop {
    // Error types
    pub use crate::error::{Error, Result};

    // Session context and configuration
    pub use crate::session::Session;
    pub use crate::config::SessionConfig;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Asset registry sub-module
    pub mod registry {
        pub use crate::registry::*;
    }

    // Decoded resources sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Asset model sub-module
    pub mod asset {
        pub use crate::asset::*;
    }

    // Scene collaborator sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Spawn planning sub-module
    pub mod spawn {
        pub use crate::spawn::*;
    }

    // Mod loading sub-module
    pub mod loader {
        pub use crate::loader::*;
    }

    // Replicated state sub-module
    pub mod replication {
        pub use crate::replication::*;
    }
}

// Re-export math library at crate root
pub use glam;
