//! `ts-cli`: TypeScript command-line tool on commander.

use stackforge_core::Language;

use super::{Entry, package_json::PackageJson, shared};
use crate::{Blueprint, Content, Fragment, Gate, GenerationOptions};

const PACKAGE: PackageJson = PackageJson {
    description: "Command-line tool",
    main: "dist/index.js",
    bin: Some("dist/index.js"),
    scripts: &[
        Entry::always("build", "tsc -p tsconfig.json"),
        Entry::always("start", "node dist/index.js"),
        Entry::always("dev", "ts-node src/index.ts"),
        Entry::tests("test", "vitest run"),
        Entry::linter("lint", "eslint src"),
        Entry::linter("format", "prettier --write src"),
    ],
    dependencies: &[
        Entry::always("chalk", "^4.1.2"),
        Entry::always("commander", "^12.0.0"),
    ],
    dev_dependencies: &[
        Entry::always("@types/node", "^20.12.7"),
        Entry::always("ts-node", "^10.9.2"),
        Entry::always("typescript", "^5.4.5"),
        Entry::tests("vitest", "^1.6.0"),
        Entry::linter("@eslint/js", "^9.2.0"),
        Entry::linter("eslint", "^9.2.0"),
        Entry::linter("eslint-config-prettier", "^9.1.0"),
        Entry::linter("prettier", "^3.2.5"),
        Entry::linter("typescript-eslint", "^7.8.0"),
    ],
};

fn package_json(options: &GenerationOptions) -> String {
    PACKAGE.render(options)
}

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "commonjs",
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "declaration": false
  },
  "include": ["src/**/*.ts"]
}
"#;

const INDEX_TS: &str = r#"#!/usr/bin/env node
import chalk from 'chalk';
import { Command } from 'commander';
import { greet } from './commands/greet';

const program = new Command();

program
  .name('{{name}}')
  .description('{{name}} command-line tool')
  .version('0.1.0');

program
  .command('greet')
  .description('Print a greeting')
  .argument('[name]', 'who to greet', 'world')
  .option('-u, --uppercase', 'shout the greeting')
  .action((name: string, opts: { uppercase?: boolean }) => {
    console.log(chalk.green(greet(name, opts.uppercase ?? false)));
  });

program.parse();
"#;

const GREET_TS: &str = r#"export function greet(name: string, uppercase = false): string {
  const message = `Hello, ${name}!`;
  return uppercase ? message.toUpperCase() : message;
}
"#;

const README: &[Fragment] = &[
    Fragment::always(
        r#"# {{name}}

Command-line tool written in TypeScript.

## Usage

```bash
npm install
npm run build
npx {{name}} greet Ada --uppercase
```

Install it globally with `npm link` to run `{{name}}` directly.
"#,
    ),
    Fragment::tests(
        r#"
## Testing

```bash
npm test
```
"#,
    ),
    Fragment::linter(
        r#"
## Linting

```bash
npm run lint
npm run format
```
"#,
    ),
];

const VITEST_CONFIG: &str = r#"import { defineConfig } from 'vitest/config';

export default defineConfig({
  test: {
    include: ['tests/**/*.test.ts'],
    environment: 'node',
  },
});
"#;

const GREET_TEST: &str = r#"import { describe, expect, it } from 'vitest';
import { greet } from '../src/commands/greet';

describe('greet', () => {
  it('greets by name', () => {
    expect(greet('{{name}}')).toBe('Hello, {{name}}!');
  });

  it('shouts when asked', () => {
    expect(greet('world', true)).toBe('HELLO, WORLD!');
  });
});
"#;

const ESLINT_CONFIG: &str = r#"const js = require('@eslint/js');
const tseslint = require('typescript-eslint');
const prettier = require('eslint-config-prettier');

module.exports = tseslint.config(
  js.configs.recommended,
  ...tseslint.configs.recommended,
  prettier,
  { ignores: ['dist/'] },
);
"#;

pub static BLUEPRINTS: &[Blueprint] = &[
    Blueprint::new("package.json", Language::Json, Content::Render(package_json)),
    Blueprint::new("tsconfig.json", Language::Json, Content::Text(TSCONFIG)),
    Blueprint::new("src/index.ts", Language::TypeScript, Content::Text(INDEX_TS)),
    Blueprint::new(
        "src/commands/greet.ts",
        Language::TypeScript,
        Content::Text(GREET_TS),
    ),
    Blueprint::new(
        ".gitignore",
        Language::Plaintext,
        Content::Text(shared::NODE_GITIGNORE),
    ),
    Blueprint::new("README.md", Language::Markdown, Content::Fragments(README)),
    // tests
    Blueprint::new(
        "vitest.config.ts",
        Language::TypeScript,
        Content::Text(VITEST_CONFIG),
    )
    .gated(Gate::Tests),
    Blueprint::new(
        "tests/greet.test.ts",
        Language::TypeScript,
        Content::Text(GREET_TEST),
    )
    .gated(Gate::Tests),
    // linter
    Blueprint::new(
        "eslint.config.js",
        Language::JavaScript,
        Content::Text(ESLINT_CONFIG),
    )
    .gated(Gate::Linter),
    Blueprint::new(
        ".prettierrc",
        Language::Json,
        Content::Text(shared::PRETTIERRC),
    )
    .gated(Gate::Linter),
];
