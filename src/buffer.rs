use crate::types::{Number, Op, StructuralError, ValidationError};
use crate::QueryError;

const OP_AND: char = '&';
const OP_OR: char = '|';
const OP_NOT: char = '!';
const DELIMITER_METHOD: char = ':';
const DELIMITER_LIST_BEGIN: char = '[';
const DELIMITER_LIST_END: char = ']';
const DELIMITER_EXPR_BEGIN: char = '(';
const DELIMITER_EXPR_END: char = ')';
const DELIMITER_LIST_VALUE: char = ',';

/// Low-level DQL token accumulator.
///
/// Tokens must alternate between criteria/groups and operators; every append
/// checks its position and fails with a [`StructuralError`] when the sequence
/// is broken. A parenthesized group suspends the current accumulator on a
/// stack and resumes it on [`end_expression`](Self::end_expression), so the
/// same position checks apply independently inside each nesting level.
///
/// One buffer serves exactly one query: [`build`](Self::build) consumes it.
#[derive(Debug, Default)]
pub struct QueryBuilder {
    suspended: Vec<Part>,
    part: Part,
}

/// One nesting level of accumulated text. `size` counts appended tokens;
/// its parity decides what may come next (even = criterion or group,
/// odd = operator).
#[derive(Debug, Default)]
struct Part {
    text: String,
    size: usize,
}

impl QueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the final query text.
    ///
    /// A never-touched buffer builds to the empty string.
    ///
    /// # Errors
    ///
    /// [`StructuralError::TrailingOperator`] if the text ends on an operator,
    /// [`StructuralError::UnclosedGroup`] if a group was begun but never
    /// ended.
    pub fn build(self) -> Result<String, QueryError> {
        if self.part.size == 0 && self.suspended.is_empty() {
            return Ok(String::new());
        }
        if !self.suspended.is_empty() {
            return Err(StructuralError::UnclosedGroup.into());
        }
        self.part.validate_end()?;
        Ok(self.part.text)
    }

    /// Append an `&` or `|` between two criteria/groups.
    ///
    /// # Errors
    ///
    /// [`StructuralError::UnexpectedOperator`] at the start of an expression
    /// or directly after another operator.
    pub fn append_op(&mut self, op: Op) -> Result<(), StructuralError> {
        self.check_op_position()?;
        self.part.text.push(match op {
            Op::And => OP_AND,
            Op::Or => OP_OR,
        });
        self.part.size += 1;
        Ok(())
    }

    /// Open a parenthesized group, optionally negated (`!(`).
    ///
    /// # Errors
    ///
    /// [`StructuralError::UnexpectedGroup`] if an operator is expected here.
    pub fn begin_expression(&mut self, negated: bool) -> Result<(), StructuralError> {
        self.check_expression_position()?;
        self.append_not(negated);
        self.part.text.push(DELIMITER_EXPR_BEGIN);
        let outer = std::mem::take(&mut self.part);
        self.suspended.push(outer);
        Ok(())
    }

    /// Close the innermost group and splice its text into the enclosing
    /// level.
    ///
    /// # Errors
    ///
    /// [`StructuralError::EmptyGroup`] if nothing was appended inside the
    /// group, [`StructuralError::TrailingOperator`] if the group ends on an
    /// operator, [`StructuralError::UnmatchedGroupClose`] if no group is
    /// open.
    pub fn end_expression(&mut self) -> Result<(), StructuralError> {
        if self.part.size == 0 {
            return Err(StructuralError::EmptyGroup);
        }
        self.part.validate_end()?;
        let outer = self
            .suspended
            .pop()
            .ok_or(StructuralError::UnmatchedGroupClose)?;
        let inner = std::mem::replace(&mut self.part, outer);
        self.part.text.push_str(&inner.text);
        self.part.text.push(DELIMITER_EXPR_END);
        self.part.size += 1;
        Ok(())
    }

    /// Append a criterion with no value: `[!]field:method`.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] for an empty field or method,
    /// [`StructuralError::UnexpectedCriterion`] if an operator is expected.
    pub fn append_unary(&mut self, field: &str, method: &str, negated: bool) -> Result<(), QueryError> {
        self.append_criterion_head(field, method, negated)?;
        self.part.size += 1;
        Ok(())
    }

    /// Append `[!]field:method:"value"` with JSON string quoting/escaping.
    ///
    /// # Errors
    ///
    /// Same conditions as [`append_unary`](Self::append_unary).
    pub fn append_string(
        &mut self,
        field: &str,
        method: &str,
        value: &str,
        negated: bool,
    ) -> Result<(), QueryError> {
        self.append_criterion_head(field, method, negated)?;
        self.part.text.push(DELIMITER_METHOD);
        self.part.text.push_str(&quote(value));
        self.part.size += 1;
        Ok(())
    }

    /// Append `[!]field:method:number`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`append_unary`](Self::append_unary).
    pub fn append_number(
        &mut self,
        field: &str,
        method: &str,
        value: Number,
        negated: bool,
    ) -> Result<(), QueryError> {
        self.append_criterion_head(field, method, negated)?;
        self.part.text.push(DELIMITER_METHOD);
        self.part.text.push_str(&value.to_string());
        self.part.size += 1;
        Ok(())
    }

    /// Append `[!]field:method:[n,n,...]` with comma-separated elements.
    ///
    /// # Errors
    ///
    /// Same conditions as [`append_unary`](Self::append_unary).
    pub fn append_number_list(
        &mut self,
        field: &str,
        method: &str,
        values: &[Number],
        negated: bool,
    ) -> Result<(), QueryError> {
        self.append_criterion_head(field, method, negated)?;
        self.part.text.push(DELIMITER_METHOD);
        self.part.text.push(DELIMITER_LIST_BEGIN);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.part.text.push(DELIMITER_LIST_VALUE);
            }
            self.part.text.push_str(&value.to_string());
        }
        self.part.text.push(DELIMITER_LIST_END);
        self.part.size += 1;
        Ok(())
    }

    /// Append `[!]field:method:["a""b"...]`.
    ///
    /// String list elements are quoted back to back with NO separating comma.
    /// The backend's list format is asymmetric between numbers and strings,
    /// and the quoted tokens are self-delimiting.
    ///
    /// # Errors
    ///
    /// Same conditions as [`append_unary`](Self::append_unary).
    pub fn append_string_list(
        &mut self,
        field: &str,
        method: &str,
        values: &[String],
        negated: bool,
    ) -> Result<(), QueryError> {
        self.append_criterion_head(field, method, negated)?;
        self.part.text.push(DELIMITER_METHOD);
        self.part.text.push(DELIMITER_LIST_BEGIN);
        for value in values {
            self.part.text.push_str(&quote(value));
        }
        self.part.text.push(DELIMITER_LIST_END);
        self.part.size += 1;
        Ok(())
    }

    /// Shared prefix of every criterion append: validation, position check,
    /// then `[!]field:method`. Does not bump `size`; callers do after the
    /// value token.
    fn append_criterion_head(
        &mut self,
        field: &str,
        method: &str,
        negated: bool,
    ) -> Result<(), QueryError> {
        validate_field(field)?;
        validate_method(method)?;
        self.check_criterion_position()?;
        self.append_not(negated);
        self.part.text.push_str(field);
        self.part.text.push(DELIMITER_METHOD);
        self.part.text.push_str(method);
        Ok(())
    }

    fn append_not(&mut self, negated: bool) {
        if negated {
            self.part.text.push(OP_NOT);
        }
    }

    fn check_expression_position(&self) -> Result<(), StructuralError> {
        if self.part.size % 2 != 0 {
            return Err(StructuralError::UnexpectedGroup);
        }
        Ok(())
    }

    fn check_criterion_position(&self) -> Result<(), StructuralError> {
        if self.part.size % 2 != 0 {
            return Err(StructuralError::UnexpectedCriterion);
        }
        Ok(())
    }

    fn check_op_position(&self) -> Result<(), StructuralError> {
        if self.part.size % 2 == 0 {
            return Err(StructuralError::UnexpectedOperator);
        }
        Ok(())
    }
}

impl Part {
    fn validate_end(&self) -> Result<(), StructuralError> {
        if self.size % 2 == 0 {
            return Err(StructuralError::TrailingOperator);
        }
        Ok(())
    }
}

/// JSON-quote a string value, adding the surrounding double quotes and
/// escaping the content.
fn quote(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

fn validate_field(field: &str) -> Result<(), ValidationError> {
    if field.is_empty() {
        return Err(ValidationError::EmptyField);
    }
    Ok(())
}

fn validate_method(method: &str) -> Result<(), ValidationError> {
    if method.is_empty() {
        return Err(ValidationError::EmptyMethod);
    }
    Ok(())
}
