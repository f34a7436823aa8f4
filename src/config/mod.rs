mod settings;
mod loader;

pub use settings::{DeobfuscatorConfig, OutputConfig, SimplifyConfig, WarningsConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

/// Contents written by `luadeob init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# luadeob configuration

[simplify]
# Rerun the expression identities until nothing changes.
fixed_point = false

[warnings]
# List escape sequences the decoder refused to decode.
report_undecoded = false

[output]
# terminal | json | markdown
default_format = "terminal"
"#;
