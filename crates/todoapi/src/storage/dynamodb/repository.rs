//! DynamoDB repository implementation.
//!
//! Implements `TodoRepository` from `todoapi_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::ReturnValue;
use aws_sdk_dynamodb::Client;

use todoapi_core::storage::{RepositoryError, Result, TodoRepository};
use todoapi_core::todo::{Todo, TodoChanges};

use super::conversions::{
    item_to_todo, items_to_todos, todo_key, todo_to_item, UpdateExpression, ATTR_ID,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};

/// DynamoDB-based repository implementation.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl TodoRepository for DynamoDbRepository {
    async fn get_todo(&self, id: &str) -> Result<Option<Todo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(id)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut todos = Vec::new();
        let mut start_key = None;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            todos.extend(items_to_todos(result.items()));

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(todos)
    }

    async fn create_todo(&self, todo: &Todo) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(todo)))
            .condition_expression(format!("attribute_not_exists({ATTR_ID})"))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, todo.id.clone()))?;

        Ok(())
    }

    async fn update_todo(&self, id: &str, changes: &TodoChanges) -> Result<Todo> {
        let update = UpdateExpression::for_changes(changes);

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(id)))
            .update_expression(update.expression)
            .condition_expression(format!("attribute_exists(#{ATTR_ID})"))
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, id))?;

        let item = result.attributes.ok_or_else(|| {
            RepositoryError::InvalidData("UpdateItem returned no attributes".to_string())
        })?;

        item_to_todo(&item)
    }

    async fn delete_todo(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(todo_key(id)))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
