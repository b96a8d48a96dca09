//! Rule sets for each endpoint that accepts input.

use super::{FieldRule, Presence, Rule, RuleSet, ValueType};
use crate::domain::repositories::{OrderBy, SortDirection};

const ORDER_BY: FieldRule = FieldRule {
    name: "orderBy",
    presence: Presence::Optional,
    rules: &[Rule::Choice(OrderBy::KEYS, "Invalid orderBy value")],
};

const ORDER: FieldRule = FieldRule {
    name: "order",
    presence: Presence::Optional,
    rules: &[Rule::Choice(SortDirection::KEYS, "Invalid order value")],
};

const NAME_RULES: &[Rule] = &[
    Rule::NotBlank,
    Rule::NotNull,
    Rule::Type(ValueType::String, "Invalid name"),
];

const VEGETARIAN_RULES: &[Rule] = &[
    Rule::NotNull,
    Rule::Choice(&["true", "false"], "Invalid vegetarian value"),
];

const USERNAME: FieldRule = FieldRule {
    name: "username",
    presence: Presence::Required,
    rules: &[
        Rule::NotBlank,
        Rule::NotNull,
        Rule::Type(ValueType::String, "Invalid username"),
    ],
};

const PASSWORD: FieldRule = FieldRule {
    name: "password",
    presence: Presence::Required,
    rules: &[
        Rule::NotBlank,
        Rule::NotNull,
        Rule::Type(ValueType::String, "Invalid password"),
    ],
};

const FIRST_NAME: FieldRule = FieldRule {
    name: "firstName",
    presence: Presence::Required,
    rules: &[
        Rule::NotBlank,
        Rule::NotNull,
        Rule::Type(ValueType::String, "Invalid firstName"),
    ],
};

const LAST_NAME: FieldRule = FieldRule {
    name: "lastName",
    presence: Presence::Required,
    rules: &[
        Rule::NotBlank,
        Rule::NotNull,
        Rule::Type(ValueType::String, "Invalid lastName"),
    ],
};

/// `GET /restaurants`
pub const LIST_RESTAURANTS: RuleSet = RuleSet {
    fields: &[
        FieldRule {
            name: "from",
            presence: Presence::Optional,
            rules: &[Rule::GreaterThanOrEqual(
                0,
                "from should be greater than or equal to 0",
            )],
        },
        FieldRule {
            name: "size",
            presence: Presence::Optional,
            rules: &[Rule::GreaterThanOrEqual(
                0,
                "size value should be greater than or equal to 0",
            )],
        },
        ORDER_BY,
        ORDER,
    ],
    allow_extra_fields: false,
};

/// `GET /restaurants/search`
pub const SEARCH_RESTAURANTS: RuleSet = RuleSet {
    fields: &[
        FieldRule {
            name: "name",
            presence: Presence::Optional,
            rules: NAME_RULES,
        },
        FieldRule {
            name: "hasVegetarian",
            presence: Presence::Optional,
            rules: &[Rule::NotNull],
        },
        ORDER_BY,
        ORDER,
    ],
    allow_extra_fields: false,
};

/// `POST /restaurants`
pub const CREATE_RESTAURANT: RuleSet = RuleSet {
    fields: &[
        FieldRule {
            name: "name",
            presence: Presence::Required,
            rules: NAME_RULES,
        },
        FieldRule {
            name: "hasVegetarian",
            presence: Presence::Required,
            rules: VEGETARIAN_RULES,
        },
    ],
    allow_extra_fields: false,
};

/// `PATCH /restaurants/{id}`
pub const UPDATE_RESTAURANT: RuleSet = RuleSet {
    fields: &[
        FieldRule {
            name: "name",
            presence: Presence::Optional,
            rules: NAME_RULES,
        },
        FieldRule {
            name: "hasVegetarian",
            presence: Presence::Optional,
            rules: VEGETARIAN_RULES,
        },
    ],
    allow_extra_fields: false,
};

/// `POST /user`
pub const CREATE_USER: RuleSet = RuleSet {
    fields: &[USERNAME, PASSWORD, FIRST_NAME, LAST_NAME],
    allow_extra_fields: false,
};

/// `POST /auth`
pub const AUTH: RuleSet = RuleSet {
    fields: &[USERNAME, PASSWORD],
    allow_extra_fields: false,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::validation::{BLANK_MESSAGE, MISSING_MESSAGE, UNEXPECTED_MESSAGE};
    use serde_json::{Map, Value, json};

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn message(rules: &RuleSet, value: Value) -> Option<String> {
        rules.validate(&fields(value)).err().map(|e| e.to_string())
    }

    #[test]
    fn test_list_accepts_defaults_and_known_keys() {
        assert_eq!(message(&LIST_RESTAURANTS, json!({})), None);
        assert_eq!(
            message(
                &LIST_RESTAURANTS,
                json!({ "from": "0", "size": "10", "orderBy": "prepTime", "order": "desc" })
            ),
            None
        );
    }

    #[test]
    fn test_list_rejects_invalid_order_by() {
        assert_eq!(
            message(&LIST_RESTAURANTS, json!({ "orderBy": "invalidValue" })).as_deref(),
            Some("Invalid orderBy value")
        );
        assert_eq!(
            message(&LIST_RESTAURANTS, json!({ "order": "sideways" })).as_deref(),
            Some("Invalid order value")
        );
    }

    #[test]
    fn test_list_rejects_negative_window() {
        assert_eq!(
            message(&LIST_RESTAURANTS, json!({ "from": "-1", "size": "5" })).as_deref(),
            Some("from should be greater than or equal to 0")
        );
        assert_eq!(
            message(&LIST_RESTAURANTS, json!({ "from": "0", "size": "-5" })).as_deref(),
            Some("size value should be greater than or equal to 0")
        );
    }

    #[test]
    fn test_list_rejects_unknown_parameter() {
        assert_eq!(
            message(&LIST_RESTAURANTS, json!({ "page": "2" })).as_deref(),
            Some(UNEXPECTED_MESSAGE)
        );
    }

    #[test]
    fn test_create_restaurant_requires_both_fields() {
        assert_eq!(
            message(&CREATE_RESTAURANT, json!({})).as_deref(),
            Some(MISSING_MESSAGE)
        );
        assert_eq!(
            message(&CREATE_RESTAURANT, json!({ "name": "Nepalico" })).as_deref(),
            Some(MISSING_MESSAGE)
        );
        assert_eq!(
            message(
                &CREATE_RESTAURANT,
                json!({ "name": "Nepalico", "hasVegetarian": "true" })
            ),
            None
        );
    }

    #[test]
    fn test_create_restaurant_vegetarian_values() {
        assert_eq!(
            message(
                &CREATE_RESTAURANT,
                json!({ "name": "Nepalico", "hasVegetarian": false })
            ),
            None
        );
        assert_eq!(
            message(
                &CREATE_RESTAURANT,
                json!({ "name": "Nepalico", "hasVegetarian": "yes" })
            )
            .as_deref(),
            Some("Invalid vegetarian value")
        );
    }

    #[test]
    fn test_update_restaurant_allows_partial_body() {
        assert_eq!(message(&UPDATE_RESTAURANT, json!({})), None);
        assert_eq!(
            message(&UPDATE_RESTAURANT, json!({ "hasVegetarian": "false" })),
            None
        );
        assert_eq!(
            message(&UPDATE_RESTAURANT, json!({ "name": " " })).as_deref(),
            Some(BLANK_MESSAGE)
        );
    }

    #[test]
    fn test_search_accepts_any_vegetarian_text() {
        assert_eq!(
            message(&SEARCH_RESTAURANTS, json!({ "hasVegetarian": "on" })),
            None
        );
    }

    #[test]
    fn test_create_user_requires_every_field() {
        let complete = json!({
            "username": "t",
            "password": "p",
            "firstName": "F",
            "lastName": "L"
        });
        assert_eq!(message(&CREATE_USER, complete), None);

        assert_eq!(
            message(
                &CREATE_USER,
                json!({ "username": "t", "password": "p", "firstName": "F" })
            )
            .as_deref(),
            Some(MISSING_MESSAGE)
        );
    }

    #[test]
    fn test_auth_rejects_extra_fields() {
        assert_eq!(
            message(
                &AUTH,
                json!({ "username": "t", "password": "p", "remember": "1" })
            )
            .as_deref(),
            Some(UNEXPECTED_MESSAGE)
        );
    }

    #[test]
    fn test_user_fields_name_themselves_on_wrong_type() {
        assert_eq!(
            message(&AUTH, json!({ "username": 42, "password": "p" })).as_deref(),
            Some("Invalid username")
        );
        assert_eq!(
            message(
                &CREATE_USER,
                json!({ "username": "t", "password": "p", "firstName": "F", "lastName": true })
            )
            .as_deref(),
            Some("Invalid lastName")
        );
    }
}
