//! Holder types and modules shared by the DI tests

use vmf_application::registry::{RegistryBuilder, STATE_HOLDERS, StateHolderEntry};
use vmf_domain::ports::{HolderType, StateHolder};
use vmf_domain::value_objects::Descriptor;
use vmf_infrastructure::di::HolderModule;

pub const SCREEN: Descriptor = Descriptor::refining("screen", &[Descriptor::STATE_HOLDER]);

/// Generic screen state, bound under `SCREEN`
#[derive(Debug, Default)]
pub struct ScreenHolder;

impl StateHolder for ScreenHolder {
    fn descriptor(&self) -> Descriptor {
        Self::DESCRIPTOR
    }
}

impl HolderType for ScreenHolder {
    const DESCRIPTOR: Descriptor = SCREEN;
}

/// Editor state, a refinement of `SCREEN`
#[derive(Debug, Default)]
pub struct EditorHolder {
    pub lines: Vec<String>,
}

impl StateHolder for EditorHolder {
    fn descriptor(&self) -> Descriptor {
        Self::DESCRIPTOR
    }
}

impl HolderType for EditorHolder {
    const DESCRIPTOR: Descriptor = Descriptor::refining("editor", &[SCREEN]);
}

/// Viewer state, a refinement of `SCREEN` that no module binds
#[derive(Debug, Default)]
pub struct ViewerHolder;

impl StateHolder for ViewerHolder {
    fn descriptor(&self) -> Descriptor {
        Self::DESCRIPTOR
    }
}

impl HolderType for ViewerHolder {
    const DESCRIPTOR: Descriptor = Descriptor::refining("viewer", &[SCREEN]);
}

/// Scratchpad state, registered through the distributed slice
#[derive(Debug, Default)]
pub struct ScratchpadHolder;

impl StateHolder for ScratchpadHolder {
    fn descriptor(&self) -> Descriptor {
        Self::DESCRIPTOR
    }
}

impl HolderType for ScratchpadHolder {
    const DESCRIPTOR: Descriptor = Descriptor::refining("scratchpad", &[SCREEN]);
}

#[linkme::distributed_slice(STATE_HOLDERS)]
static SCRATCHPAD_HOLDER: StateHolderEntry = StateHolderEntry {
    descriptor: ScratchpadHolder::DESCRIPTOR,
    description: "Scratchpad used by container tests",
    factory: || Ok(Box::new(ScratchpadHolder)),
};

/// Binds `EditorHolder` exactly
pub struct EditorModule;

impl HolderModule for EditorModule {
    fn name(&self) -> &'static str {
        "editor"
    }

    fn bind(&self, builder: RegistryBuilder) -> RegistryBuilder {
        builder.bind_described(EditorHolder::DESCRIPTOR, "Editor screen", || {
            Ok(Box::new(EditorHolder {
                lines: vec!["PUSH 1".to_string()],
            }))
        })
    }
}

/// Binds `ScreenHolder` under the broad `SCREEN` key
pub struct ScreenModule;

impl HolderModule for ScreenModule {
    fn name(&self) -> &'static str {
        "screen"
    }

    fn bind(&self, builder: RegistryBuilder) -> RegistryBuilder {
        builder.bind(SCREEN, || Ok(Box::new(ScreenHolder)))
    }
}

/// Binds the scratchpad explicitly, colliding with its slice registration
pub struct ScratchpadModule;

impl HolderModule for ScratchpadModule {
    fn name(&self) -> &'static str {
        "scratchpad"
    }

    fn bind(&self, builder: RegistryBuilder) -> RegistryBuilder {
        builder.bind(ScratchpadHolder::DESCRIPTOR, || Ok(Box::new(ScratchpadHolder)))
    }
}
