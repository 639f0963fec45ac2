pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use shelf_kernel::{InitCtx, Module};

use routes::SharedStore;
use store::MemoryBookStore;

/// Books module: an ordered in-memory collection exposed as list/create/delete
pub struct BooksModule {
    store: SharedStore,
}

impl BooksModule {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Module backed by a fresh in-memory store, seeded unless disabled
    pub fn in_memory(seed: bool) -> Self {
        let store = if seed {
            MemoryBookStore::seeded()
        } else {
            MemoryBookStore::empty()
        };
        Self::new(Arc::new(store))
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if self.store.is_empty().await {
            tracing::info!(module = self.name(), "books collection starts empty");
        }

        let books = self.store.len().await;
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Every book in insertion order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Book"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/Book"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "The created book",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Book"
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Body could not be decoded",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/{id}": {
                    "delete": {
                        "summary": "Delete a book by id",
                        "tags": ["Books"],
                        "parameters": [{
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "string" }
                        }],
                        "responses": {
                            "200": {
                                "description": "Book deleted",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/DeleteResponse"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "No book with that id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/ErrorResponse"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "Caller-supplied identifier"
                            },
                            "title": {
                                "type": "string",
                                "description": "Title of the book"
                            },
                            "author": {
                                "type": "string",
                                "description": "Author of the book"
                            },
                            "quantity": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Copies on hand"
                            }
                        },
                        "required": ["id", "title", "author", "quantity"]
                    },
                    "DeleteResponse": {
                        "type": "object",
                        "properties": {
                            "message": {
                                "type": "string"
                            }
                        },
                        "required": ["message"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let discarded = self.store.len().await;
        tracing::info!(
            module = self.name(),
            discarded,
            "books module stopped"
        );
        Ok(())
    }
}

/// Create the books module according to `settings`
pub fn create_module(settings: &shelf_kernel::Settings) -> Arc<dyn Module> {
    Arc::new(BooksModule::in_memory(settings.books.seed))
}
