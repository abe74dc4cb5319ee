//! `node-express`: TypeScript microservice on Express.

use stackforge_core::Language;

use super::{Entry, package_json::PackageJson, shared};
use crate::{Blueprint, Content, Fragment, Gate, GenerationOptions};

const PACKAGE: PackageJson = PackageJson {
    description: "Express microservice",
    main: "dist/index.js",
    bin: None,
    scripts: &[
        Entry::always("build", "tsc -p tsconfig.json"),
        Entry::always("start", "node dist/index.js"),
        Entry::always("dev", "ts-node-dev --respawn --transpile-only src/index.ts"),
        Entry::tests("test", "jest --coverage"),
        Entry::linter("lint", "eslint \\\"src/**/*.ts\\\""),
        Entry::linter("format", "prettier --write \\\"src/**/*.ts\\\""),
    ],
    dependencies: &[
        Entry::always("dotenv", "^16.4.5"),
        Entry::always("express", "^4.19.2"),
        Entry::always("helmet", "^7.1.0"),
    ],
    dev_dependencies: &[
        Entry::always("@types/express", "^4.17.21"),
        Entry::always("@types/node", "^20.12.7"),
        Entry::always("ts-node-dev", "^2.0.0"),
        Entry::always("typescript", "^5.4.5"),
        Entry::tests("@types/jest", "^29.5.12"),
        Entry::tests("@types/supertest", "^6.0.2"),
        Entry::tests("jest", "^29.7.0"),
        Entry::tests("supertest", "^7.0.0"),
        Entry::tests("ts-jest", "^29.1.2"),
        Entry::linter("@typescript-eslint/eslint-plugin", "^7.8.0"),
        Entry::linter("@typescript-eslint/parser", "^7.8.0"),
        Entry::linter("eslint", "^8.57.0"),
        Entry::linter("eslint-config-prettier", "^9.1.0"),
        Entry::linter("prettier", "^3.2.5"),
    ],
};

fn package_json(options: &GenerationOptions) -> String {
    PACKAGE.render(options)
}

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "commonjs",
    "lib": ["ES2022"],
    "outDir": "dist",
    "rootDir": "src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true
  },
  "include": ["src/**/*.ts"],
  "exclude": ["node_modules", "dist", "tests"]
}
"#;

const INDEX_TS: &str = r#"import 'dotenv/config';
import { createApp } from './app';

const port = Number(process.env.PORT ?? 3000);

createApp().listen(port, () => {
  console.log(`{{name}} listening on port ${port}`);
});
"#;

const APP_TS: &str = r#"import express from 'express';
import helmet from 'helmet';
import { healthRouter } from './routes/health';

export function createApp() {
  const app = express();

  app.use(helmet());
  app.use(express.json());
  app.use('/health', healthRouter);

  return app;
}
"#;

const HEALTH_TS: &str = r#"import { Router } from 'express';

export const healthRouter = Router();

healthRouter.get('/', (_req, res) => {
  res.json({ status: 'ok', service: '{{name}}' });
});
"#;

const DOCKERFILE: &str = r#"FROM node:20-alpine AS build
WORKDIR /app
COPY package*.json ./
RUN npm ci
COPY tsconfig.json ./
COPY src ./src
RUN npm run build

FROM node:20-alpine
WORKDIR /app
ENV NODE_ENV=production
LABEL org.opencontainers.image.title="{{name}}"
COPY package*.json ./
RUN npm ci --omit=dev
COPY --from=build /app/dist ./dist
EXPOSE 3000
CMD ["node", "dist/index.js"]
"#;

const DOCKER_COMPOSE: &str = r#"services:
  {{name}}:
    build: .
    image: {{name}}:latest
    container_name: {{name}}
    ports:
      - "3000:3000"
    environment:
      - PORT=3000
    restart: unless-stopped
"#;

const DOCKERIGNORE: &str = r#"node_modules
dist
coverage
.env
"#;

const README: &[Fragment] = &[
    Fragment::always(
        r#"# {{name}}

Express microservice written in TypeScript.

## Getting started

```bash
npm install
npm run dev
```

The service listens on `http://localhost:3000` and exposes `GET /health`.

## Docker

```bash
docker compose up --build
```
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

const JEST_CONFIG: &str = r#"/** @type {import('jest').Config} */
module.exports = {
  preset: 'ts-jest',
  testEnvironment: 'node',
  roots: ['<rootDir>/tests'],
  collectCoverageFrom: ['src/**/*.ts', '!src/index.ts'],
};
"#;

const HEALTH_TEST: &str = r#"import request from 'supertest';
import { createApp } from '../src/app';

describe('GET /health', () => {
  it('reports the service as healthy', async () => {
    const res = await request(createApp()).get('/health');

    expect(res.status).toBe(200);
    expect(res.body).toEqual({ status: 'ok', service: '{{name}}' });
  });
});
"#;

const ESLINTRC: &str = r#"{
  "root": true,
  "parser": "@typescript-eslint/parser",
  "plugins": ["@typescript-eslint"],
  "extends": [
    "eslint:recommended",
    "plugin:@typescript-eslint/recommended",
    "prettier"
  ],
  "env": {
    "node": true,
    "es2022": true
  },
  "ignorePatterns": ["dist", "node_modules"]
}
"#;

pub static BLUEPRINTS: &[Blueprint] = &[
    Blueprint::new("package.json", Language::Json, Content::Render(package_json)),
    Blueprint::new("tsconfig.json", Language::Json, Content::Text(TSCONFIG)),
    Blueprint::new("src/index.ts", Language::TypeScript, Content::Text(INDEX_TS)),
    Blueprint::new("src/app.ts", Language::TypeScript, Content::Text(APP_TS)),
    Blueprint::new(
        "src/routes/health.ts",
        Language::TypeScript,
        Content::Text(HEALTH_TS),
    ),
    Blueprint::new("Dockerfile", Language::Dockerfile, Content::Text(DOCKERFILE)),
    Blueprint::new(
        "docker-compose.yml",
        Language::Yaml,
        Content::Text(DOCKER_COMPOSE),
    ),
    Blueprint::new(".dockerignore", Language::Plaintext, Content::Text(DOCKERIGNORE)),
    Blueprint::new(
        ".gitignore",
        Language::Plaintext,
        Content::Text(shared::NODE_GITIGNORE),
    ),
    Blueprint::new("README.md", Language::Markdown, Content::Fragments(README)),
    // tests
    Blueprint::new(
        "jest.config.js",
        Language::JavaScript,
        Content::Text(JEST_CONFIG),
    )
    .gated(Gate::Tests),
    Blueprint::new(
        "tests/health.test.ts",
        Language::TypeScript,
        Content::Text(HEALTH_TEST),
    )
    .gated(Gate::Tests),
    // linter
    Blueprint::new(".eslintrc.json", Language::Json, Content::Text(ESLINTRC)).gated(Gate::Linter),
    Blueprint::new(
        ".prettierrc",
        Language::Json,
        Content::Text(shared::PRETTIERRC),
    )
    .gated(Gate::Linter),
];
