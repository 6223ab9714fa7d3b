/*!
# Galaxy 3D Outline

Selection outline rendering for the Galaxy 3D engine.

Given a dynamic set of selected objects, this crate records, once per
camera per frame, a deferred command sequence that draws the objects'
silhouettes, blurs them and composites a colored outline onto the
camera's color buffer. The sequence is attached to the camera after
opaque geometry and detached again once the camera has rendered.

## Architecture

- **SelectionRegistry**: insertion-ordered map from object handle to renderable parts
- **VisibilityCuller**: per-camera frustum filtering of the registry
- **OutlinePipeline**: mask pass, separable blur and composite recording
- **CameraHookManager**: single-binding state machine driven by pre/post-render hooks
- **OutlineRenderer**: owned context exposing select/deselect, configuration and hooks

The graphics backend is consumed through the `RenderBackend` and
`CommandEncoder` traits; shader programs are opaque `ProgramId`s.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod renderer;
pub mod selection;
pub mod outline;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Owned outline context
    pub use crate::outline::OutlineRenderer;

    // Logging sub-module (types and logger control, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render sub-module with backend seams and command recording
    pub mod render {
        pub use crate::renderer::*;
    }

    // Selection sub-module
    pub mod selection {
        pub use crate::selection::*;
    }

    // Outline pipeline sub-module
    pub mod outline {
        pub use crate::outline::*;
    }
}

// Re-export math library at crate root
pub use glam;
