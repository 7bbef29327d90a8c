pub use self::kind::{ParseKindError, ResourceCollection, WorkloadKind};

mod kind;
