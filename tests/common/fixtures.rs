//! Reusable project layouts and expected renderings.

/// `proj/` with sources, docs, a manifest and a build directory
pub const PROJECT_FILES: &[(&str, &str)] = &[
    ("proj/Cargo.toml", "[package]\nname = \"proj\"\n"),
    ("proj/docs/guide.md", "# Guide\n"),
    ("proj/src/cli/main.rs", "fn main() {}\n"),
    ("proj/src/core/tree.rs", "pub struct Tree;\n"),
    ("proj/target/debug/app", ""),
];

pub const PROJECT_FULL: &str = "\
└── proj
    ├── Cargo.toml
    ├── docs
    │   └── guide.md
    ├── src
    │   ├── cli
    │   │   └── main.rs
    │   └── core
    │       └── tree.rs
    └── target
        └── debug
            └── app
";

pub const PROJECT_WITHOUT_TARGET: &str = "\
└── proj
    ├── Cargo.toml
    ├── docs
    │   └── guide.md
    └── src
        ├── cli
        │   └── main.rs
        └── core
            └── tree.rs
";

pub const EXCLUDE_TARGET_CONFIG: &str = "[tree]\nexclude = [\"^target$\"]\n";
