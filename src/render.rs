//! Single-pass serialization of a [`Criteria`] tree into DQL text.
//!
//! Grouping decisions are local: each composite looks only at its immediate
//! children. A negated node always renders inside its own `!( ... )` group;
//! an un-negated composite child is wrapped by its parent when precedence
//! demands it.

use crate::buffer::QueryBuilder;
use crate::types::{Criteria, Method, Op, Value};
use crate::QueryError;

pub(crate) fn render(criteria: &Criteria) -> Result<String, QueryError> {
    let mut builder = QueryBuilder::new();
    visit(criteria, &mut builder)?;
    builder.build()
}

fn visit(criteria: &Criteria, builder: &mut QueryBuilder) -> Result<(), QueryError> {
    match criteria {
        Criteria::Criterion {
            field,
            method,
            value,
            negated,
        } => visit_criterion(builder, field, *method, value.as_ref(), *negated),
        Criteria::Composite {
            left,
            op,
            right,
            negated,
        } => visit_composite(builder, left, *op, right, *negated),
    }
}

fn visit_criterion(
    builder: &mut QueryBuilder,
    field: &str,
    method: Method,
    value: Option<&Value>,
    negated: bool,
) -> Result<(), QueryError> {
    let method = method.as_str();
    match value {
        None => builder.append_unary(field, method, negated),
        Some(Value::String(v)) => builder.append_string(field, method, v, negated),
        Some(Value::Number(v)) => builder.append_number(field, method, *v, negated),
        Some(Value::NumberList(v)) => builder.append_number_list(field, method, v, negated),
        Some(Value::StringList(v)) => builder.append_string_list(field, method, v, negated),
    }
}

fn visit_composite(
    builder: &mut QueryBuilder,
    left: &Criteria,
    op: Op,
    right: &Criteria,
    negated: bool,
) -> Result<(), QueryError> {
    let group_left = needs_group(left, op, Side::Left);
    let group_right = needs_group(right, op, Side::Right);
    if negated {
        builder.begin_expression(true)?;
    }
    if group_left {
        builder.begin_expression(false)?;
    }
    visit(left, builder)?;
    if group_left {
        builder.end_expression()?;
    }
    builder.append_op(op)?;
    if group_right {
        builder.begin_expression(false)?;
    }
    visit(right, builder)?;
    if group_right {
        builder.end_expression()?;
    }
    if negated {
        builder.end_expression()?;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq)]
enum Side {
    Left,
    Right,
}

/// A left child groups only on strictly lower precedence; a right child also
/// groups on equal precedence. Same-operator chains therefore flatten on the
/// left (`a&b&c`) and stay grouped on the right (`a&(b&c)`). A negated child
/// never needs a parent-supplied group: rendering it emits its own `!( ... )`.
fn needs_group(child: &Criteria, parent: Op, side: Side) -> bool {
    match child {
        Criteria::Composite { op, negated, .. } if !negated => match side {
            Side::Left => op.precedence() < parent.precedence(),
            Side::Right => op.precedence() <= parent.precedence(),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Criteria, Method};

    fn leaf(field: &str) -> Criteria {
        Criteria::string(field, Method::Eq, field)
    }

    fn unary(field: &str) -> Criteria {
        Criteria::unary(field, Method::IsTrue)
    }

    #[test]
    fn leaf_renders_without_grouping() {
        assert_eq!(leaf("a").to_query().unwrap(), "a:eq:\"a\"");
    }

    #[test]
    fn negated_leaf() {
        assert_eq!((!leaf("a")).to_query().unwrap(), "!a:eq:\"a\"");
    }

    #[test]
    fn or_under_and_groups_left() {
        let q = leaf("a").or(leaf("b")).and(leaf("c")).to_query().unwrap();
        assert_eq!(q, "(a:eq:\"a\"|b:eq:\"b\")&c:eq:\"c\"");
    }

    #[test]
    fn and_under_or_needs_no_group() {
        let q = leaf("a").and(leaf("b")).or(leaf("c")).to_query().unwrap();
        assert_eq!(q, "a:eq:\"a\"&b:eq:\"b\"|c:eq:\"c\"");
    }

    #[test]
    fn negated_and_under_or() {
        let q = (!leaf("a").and(leaf("b"))).or(leaf("c")).to_query().unwrap();
        assert_eq!(q, "!(a:eq:\"a\"&b:eq:\"b\")|c:eq:\"c\"");
    }

    #[test]
    fn and_as_right_child_of_or_needs_no_group() {
        let q = leaf("a").or(leaf("b").and(leaf("c"))).to_query().unwrap();
        assert_eq!(q, "a:eq:\"a\"|b:eq:\"b\"&c:eq:\"c\"");
    }

    #[test]
    fn negated_right_child_supplies_its_own_group() {
        let q = leaf("a").or(!leaf("b").and(leaf("c"))).to_query().unwrap();
        assert_eq!(q, "a:eq:\"a\"|!(b:eq:\"b\"&c:eq:\"c\")");
    }

    #[test]
    fn same_precedence_chain_flattens_left() {
        let q = unary("a").and(unary("b")).and(unary("c")).to_query().unwrap();
        assert_eq!(q, "a:isTrue&b:isTrue&c:isTrue");
    }

    #[test]
    fn same_precedence_right_child_stays_grouped() {
        let q = unary("a").and(unary("b").and(unary("c"))).to_query().unwrap();
        assert_eq!(q, "a:isTrue&(b:isTrue&c:isTrue)");
    }

    #[test]
    fn or_chain_flattens_left_and_groups_right() {
        let left = unary("a").or(unary("b")).or(unary("c"));
        assert_eq!(left.to_query().unwrap(), "a:isTrue|b:isTrue|c:isTrue");
        let right = unary("a").or(unary("b").or(unary("c")));
        assert_eq!(right.to_query().unwrap(), "a:isTrue|(b:isTrue|c:isTrue)");
    }

    #[test]
    fn negated_or_under_and_keeps_single_group() {
        // The negation group doubles as the precedence group.
        let q = (!leaf("a").or(leaf("b"))).and(leaf("c")).to_query().unwrap();
        assert_eq!(q, "!(a:eq:\"a\"|b:eq:\"b\")&c:eq:\"c\"");
    }

    #[test]
    fn double_negation_renders_like_plain() {
        let plain = leaf("a").and(leaf("b"));
        let doubled = !!plain.clone();
        assert_eq!(plain.to_query().unwrap(), doubled.to_query().unwrap());
    }

    #[test]
    fn empty_field_fails_at_render_time() {
        use crate::{QueryError, ValidationError};
        let c = Criteria::unary("", Method::IsNull);
        assert_eq!(c.to_query(), Err(QueryError::Validation(ValidationError::EmptyField)));
    }

    #[test]
    fn empty_field_deep_in_tree_fails() {
        use crate::{QueryError, ValidationError};
        let c = unary("ok").and(Criteria::string("", Method::Eq, "v"));
        assert_eq!(c.to_query(), Err(QueryError::Validation(ValidationError::EmptyField)));
    }
}
