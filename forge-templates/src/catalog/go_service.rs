//! `go-gin`: Go microservice on gin.

use stackforge_core::Language;

use super::Entry;
use crate::{Blueprint, Content, Fragment, Gate, GenerationOptions};

const GO_VERSION: &str = "1.22";

const REQUIRES: &[Entry] = &[
    Entry::always("github.com/gin-gonic/gin", "v1.10.0"),
    Entry::tests("github.com/stretchr/testify", "v1.9.0"),
];

fn go_mod(options: &GenerationOptions) -> String {
    let requires: String = REQUIRES
        .iter()
        .filter(|e| e.gate.allows(options))
        .map(|e| format!("\t{} {}\n", e.key, e.value))
        .collect();

    format!(
        "module github.com/example/{{{{name}}}}\n\ngo {}\n\nrequire (\n{})\n",
        GO_VERSION, requires
    )
}

const MAIN_GO: &str = r#"package main

import (
	"log"
	"os"

	"github.com/example/{{name}}/internal/server"
)

func main() {
	port := os.Getenv("PORT")
	if port == "" {
		port = "8080"
	}

	srv := server.New("{{name}}")
	log.Printf("{{name}} listening on :%s", port)
	if err := srv.Run(":" + port); err != nil {
		log.Fatal(err)
	}
}
"#;

const SERVER_GO: &str = r#"package server

import (
	"github.com/gin-gonic/gin"

	"github.com/example/{{name}}/internal/handlers"
)

// New builds the HTTP engine for the service.
func New(name string) *gin.Engine {
	r := gin.New()
	r.Use(gin.Logger(), gin.Recovery())

	r.GET("/health", handlers.Health(name))

	return r
}
"#;

const HEALTH_GO: &str = r#"package handlers

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// Health reports the service as up.
func Health(service string) gin.HandlerFunc {
	return func(c *gin.Context) {
		c.JSON(http.StatusOK, gin.H{"status": "ok", "service": service})
	}
}
"#;

const DOCKERFILE: &str = r#"FROM golang:1.22-alpine AS build
WORKDIR /src
COPY go.mod go.sum* ./
RUN go mod download
COPY . .
RUN CGO_ENABLED=0 go build -o /out/{{name}} ./cmd/{{name}}

FROM gcr.io/distroless/static-debian12
LABEL org.opencontainers.image.title="{{name}}"
COPY --from=build /out/{{name}} /{{name}}
EXPOSE 8080
ENTRYPOINT ["/{{name}}"]
"#;

const DOCKER_COMPOSE: &str = r#"services:
  {{name}}:
    build: .
    image: {{name}}:latest
    container_name: {{name}}
    ports:
      - "8080:8080"
    environment:
      - PORT=8080
      - GIN_MODE=release
    restart: unless-stopped
"#;

const MAKEFILE: &[Fragment] = &[
    Fragment::always(
        "BINARY := {{name}}\n\
         \n\
         .PHONY: build\n\
         build:\n\
         \tgo build -o bin/$(BINARY) ./cmd/{{name}}\n\
         \n\
         .PHONY: run\n\
         run:\n\
         \tgo run ./cmd/{{name}}\n\
         \n\
         .PHONY: docker\n\
         docker:\n\
         \tdocker build -t {{name}}:latest .\n",
    ),
    Fragment::tests(
        "\n\
         .PHONY: test\n\
         test:\n\
         \tgo test -race -cover ./...\n",
    ),
    Fragment::linter(
        "\n\
         .PHONY: lint\n\
         lint:\n\
         \tgolangci-lint run ./...\n",
    ),
];

const GITIGNORE: &str = r#"# Binaries
bin/
/{{name}}
*.exe
*.test

# Test output
*.out
coverage.out

# Environment
.env

# IDE
.idea/
.vscode/

# OS
.DS_Store
"#;

const README: &[Fragment] = &[
    Fragment::always(
        r#"# {{name}}

Go microservice built on gin.

## Getting started

```bash
go mod tidy
make run
```

The service listens on `http://localhost:8080` and exposes `GET /health`.

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
make test
```
"#,
    ),
    Fragment::linter(
        r#"
## Linting

Requires [golangci-lint](https://golangci-lint.run).

```bash
make lint
```
"#,
    ),
];

const HEALTH_TEST_GO: &str = r#"package handlers

import (
	"net/http"
	"net/http/httptest"
	"testing"

	"github.com/gin-gonic/gin"
	"github.com/stretchr/testify/assert"
)

func TestHealth(t *testing.T) {
	gin.SetMode(gin.TestMode)
	r := gin.New()
	r.GET("/health", Health("{{name}}"))

	w := httptest.NewRecorder()
	req := httptest.NewRequest(http.MethodGet, "/health", nil)
	r.ServeHTTP(w, req)

	assert.Equal(t, http.StatusOK, w.Code)
	assert.JSONEq(t, `{"status":"ok","service":"{{name}}"}`, w.Body.String())
}
"#;

const GOLANGCI: &str = r#"run:
  timeout: 3m

linters:
  enable:
    - errcheck
    - gofmt
    - goimports
    - govet
    - ineffassign
    - misspell
    - revive
    - staticcheck
    - unused

linters-settings:
  goimports:
    local-prefixes: github.com/example/{{name}}
"#;

pub static BLUEPRINTS: &[Blueprint] = &[
    Blueprint::new("go.mod", Language::Go, Content::Render(go_mod)),
    Blueprint::new("cmd/{{name}}/main.go", Language::Go, Content::Text(MAIN_GO)),
    Blueprint::new(
        "internal/server/server.go",
        Language::Go,
        Content::Text(SERVER_GO),
    ),
    Blueprint::new(
        "internal/handlers/health.go",
        Language::Go,
        Content::Text(HEALTH_GO),
    ),
    Blueprint::new("Dockerfile", Language::Dockerfile, Content::Text(DOCKERFILE)),
    Blueprint::new(
        "docker-compose.yml",
        Language::Yaml,
        Content::Text(DOCKER_COMPOSE),
    ),
    Blueprint::new("Makefile", Language::Makefile, Content::Fragments(MAKEFILE)),
    Blueprint::new(".gitignore", Language::Plaintext, Content::Text(GITIGNORE)),
    Blueprint::new("README.md", Language::Markdown, Content::Fragments(README)),
    // tests
    Blueprint::new(
        "internal/handlers/health_test.go",
        Language::Go,
        Content::Text(HEALTH_TEST_GO),
    )
    .gated(Gate::Tests),
    // linter
    Blueprint::new(".golangci.yml", Language::Yaml, Content::Text(GOLANGCI)).gated(Gate::Linter),
];
