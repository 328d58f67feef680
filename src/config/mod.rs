mod defaults;
mod loader;
mod model;
mod rule_set;

pub use defaults::{BUNDLED_RULES_ORIGIN, DEFAULT_RULES, bundled_rule_set};
pub use loader::{
    FileRulesLoader, FileSystem, LOCAL_RULES_NAME, LoadResult, RealFileSystem, RulesLoader,
    RulesOrigin, USER_RULES_NAME,
};
pub use model::{
    CountComparison, GeneralSection, GlobalCountSpec, RuleSpec, RulesDocument, Severity,
};
pub use rule_set::{GlobalCountRule, Rule, RuleSet};
