use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Equality filter applied to a store query, rendered as `column=eq.value`.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: &'static str,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_desc: Option<&'static str>,
    pub limit: Option<u32>,
    pub on_conflict: Option<&'static str>,
}

impl Query {
    pub fn for_user(user_id: &str) -> Self {
        Self {
            filters: vec![Filter::eq("user_id", user_id)],
            ..Self::default()
        }
    }

    pub fn newest_first(mut self, column: &'static str) -> Self {
        self.order_desc = Some(column);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rows that collide on `column` are merged instead of rejected.
    pub fn merge_on(mut self, column: &'static str) -> Self {
        self.on_conflict = Some(column);
        self
    }

    pub fn and(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|filter| (filter.column.to_string(), format!("eq.{}", filter.value)))
            .collect();

        pairs.push(("select".to_string(), "*".to_string()));

        if let Some(column) = self.order_desc {
            pairs.push(("order".to_string(), format!("{}.desc", column)));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(column) = self.on_conflict {
            pairs.push(("on_conflict".to_string(), column.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let query = Query::for_user("u-1")
            .and(Filter::eq("id", "42"))
            .newest_first("logged_at")
            .limit(50);

        assert_eq!(
            query.to_pairs(),
            vec![
                ("user_id".to_string(), "eq.u-1".to_string()),
                ("id".to_string(), "eq.42".to_string()),
                ("select".to_string(), "*".to_string()),
                ("order".to_string(), "logged_at.desc".to_string()),
                ("limit".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_upsert_query_pairs() {
        assert_eq!(
            Query::default().merge_on("user_id").to_pairs(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("on_conflict".to_string(), "user_id".to_string()),
            ]
        );
    }

    #[test]
    fn test_chat_message_roles() {
        assert_eq!(ChatMessage::system("a").role, "system");
        assert_eq!(ChatMessage::user("b").role, "user");
    }
}
