//! File contents reused by more than one template.

pub const NODE_GITIGNORE: &str = r#"# Dependencies
node_modules/

# Build output
dist/

# Test output
coverage/

# Environment
.env
.env.local
.env.*.local

# IDE
.idea/
.vscode/
*.swp

# OS
.DS_Store
Thumbs.db

# Debug
*.log
npm-debug.log*
"#;

pub const PRETTIERRC: &str = r#"{
  "semi": true,
  "singleQuote": true,
  "trailingComma": "all",
  "printWidth": 100
}
"#;
