pub mod policy;

pub use policy::{
    CatchUpPolicy, Policy, PolicyContext, PolicyKind, PolicyKindError, ScriptedPolicy, UniformPolicy,
    choose_move,
};
