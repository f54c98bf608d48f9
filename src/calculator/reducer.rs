//! Incremental precedence reduction over a three-slot history.
//!
//! With only two priority classes, any three consecutive pending operators
//! contain a priority boundary that allows a collapse. The reducer therefore
//! never holds more than three operands and, transiently, three operators.
//! After every operator it collapses exactly the sub-expressions whose
//! result can no longer be affected by later input:
//!
//! - `a + b +` and `a * b *` collapse `a . b` immediately.
//! - `a + b *` waits, since `b` still belongs to the multiplication.
//! - `a + b * c *` collapses `b * c`, and `a + b * c +` collapses everything.

use super::error::CalcError;
use super::operator::Operator;

/// Maximum number of pending operands.
pub const SLOTS: usize = 3;

/// Pending operands and operators awaiting combination.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionReducer {
    operands: [f64; SLOTS],
    operators: [Option<Operator>; SLOTS],
    depth: usize,
}

impl Default for ExpressionReducer {
    fn default() -> Self {
        Self {
            operands: [0.0; SLOTS],
            operators: [None; SLOTS],
            depth: 0,
        }
    }
}

impl ExpressionReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of operators currently pending.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn operands(&self) -> &[f64; SLOTS] {
        &self.operands
    }

    pub fn operators(&self) -> &[Option<Operator>; SLOTS] {
        &self.operators
    }

    /// Push `value` with the operator that follows it, then reduce.
    pub fn submit_operator(&mut self, value: f64, op: Operator) -> Result<(), CalcError> {
        if self.depth >= SLOTS {
            return Err(CalcError::UnreachableDepth { depth: self.depth });
        }

        self.operands[self.depth] = value;
        self.operators[self.depth] = Some(op);
        self.depth += 1;
        tracing::debug!(value, operator = %op, depth = self.depth, "operator submitted");

        self.reduce()?;
        self.check_invariants();
        Ok(())
    }

    /// Collapse every pending sub-expression that is already unambiguous.
    pub fn reduce(&mut self) -> Result<(), CalcError> {
        match self.depth {
            2 => {
                let first = self.operator_at(0)?;
                let second = self.operator_at(1)?;
                if second.is_low() || first.is_high() {
                    self.collapse_left()?;
                }
            }
            3 => {
                let first = self.operator_at(0)?;
                let second = self.operator_at(1)?;
                let newest = self.operator_at(2)?;

                if !(first.is_low() && second.is_high()) {
                    return Err(CalcError::UnexpectedState {
                        depth: self.depth,
                        operators: self.operators,
                    });
                }

                self.collapse_middle()?;
                if newest.is_low() {
                    self.collapse_left()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Fold operand 1 into operand 0 and shift the window left.
    pub fn collapse_left(&mut self) -> Result<(), CalcError> {
        self.operands[0] = apply(self.operands[0], self.operands[1], self.operators[0])?;
        self.operands[1] = 0.0;
        self.operators[0] = self.operators[1];
        self.operators[1] = None;
        self.depth = self.depth.saturating_sub(1);
        tracing::debug!(result = self.operands[0], depth = self.depth, "collapsed left");
        Ok(())
    }

    /// Fold operand 2 into operand 1, keeping operand 0 pending.
    pub fn collapse_middle(&mut self) -> Result<(), CalcError> {
        self.operands[1] = apply(self.operands[1], self.operands[2], self.operators[1])?;
        self.operands[2] = 0.0;
        self.operators[1] = self.operators[2];
        self.operators[2] = None;
        self.depth = self.depth.saturating_sub(1);
        tracing::debug!(result = self.operands[1], depth = self.depth, "collapsed middle");
        Ok(())
    }

    /// Finish the expression with `value` as the last operand.
    pub fn equals(&mut self, value: f64) -> Result<f64, CalcError> {
        let result = match self.depth {
            0 => value,
            1 => {
                self.operands[1] = value;
                self.collapse_left()?;
                self.operands[0]
            }
            2 => {
                self.operands[2] = value;
                self.collapse_middle()?;
                self.collapse_left()?;
                self.operands[0]
            }
            depth => return Err(CalcError::UnreachableDepth { depth }),
        };

        self.operators = [None; SLOTS];
        self.operands[1] = 0.0;
        self.operands[2] = 0.0;
        self.depth = 0;
        self.check_invariants();

        tracing::debug!(result, "expression evaluated");
        Ok(result)
    }

    /// Forget all pending operands and operators.
    pub fn full_clear(&mut self) {
        *self = Self::default();
    }

    fn operator_at(&self, slot: usize) -> Result<Operator, CalcError> {
        self.operators[slot].ok_or_else(|| CalcError::UnexpectedState {
            depth: self.depth,
            operators: self.operators,
        })
    }

    /// Slots fill left to right and the depth counts the filled ones.
    fn invariants_hold(&self) -> bool {
        let filled = self.operators.iter().take_while(|op| op.is_some()).count();
        let no_gaps = self.operators[filled..].iter().all(Option::is_none);
        no_gaps && filled == self.depth && self.depth < SLOTS
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.invariants_hold(),
            "reducer invariant violated: {:?}",
            self
        );
    }
}

/// Combine two operands with the operator held in a slot.
pub fn apply(a: f64, b: f64, op: Option<Operator>) -> Result<f64, CalcError> {
    let op = op.ok_or(CalcError::NoOperation)?;
    Ok(op.eval(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Operator::*;

    /// Feed `a op b op c ... =` through the reducer.
    fn evaluate(first: f64, rest: &[(Operator, f64)]) -> f64 {
        let mut reducer = ExpressionReducer::new();
        let mut pending = first;
        for &(op, value) in rest {
            reducer.submit_operator(pending, op).unwrap();
            pending = value;
        }
        reducer.equals(pending).unwrap()
    }

    #[test]
    fn test_binary_operations() {
        assert_eq!(evaluate(3.0, &[(Add, 4.0)]), 7.0);
        assert_eq!(evaluate(3.0, &[(Subtract, 4.0)]), -1.0);
        assert_eq!(evaluate(3.0, &[(Multiply, 4.0)]), 12.0);
        assert_eq!(evaluate(3.0, &[(Divide, 4.0)]), 0.75);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate(2.0, &[(Add, 3.0), (Multiply, 4.0)]), 14.0);
        assert_eq!(evaluate(2.0, &[(Multiply, 3.0), (Add, 4.0)]), 10.0);
        assert_eq!(evaluate(10.0, &[(Subtract, 8.0), (Divide, 4.0)]), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate(8.0, &[(Subtract, 3.0), (Subtract, 2.0)]), 3.0);
        assert_eq!(evaluate(8.0, &[(Divide, 4.0), (Divide, 2.0)]), 1.0);
        assert_eq!(evaluate(2.0, &[(Multiply, 3.0), (Divide, 4.0)]), 1.5);
    }

    #[test]
    fn test_low_high_low_double_collapse() {
        let mut reducer = ExpressionReducer::new();
        reducer.submit_operator(2.0, Add).unwrap();
        reducer.submit_operator(3.0, Multiply).unwrap();
        assert_eq!(reducer.depth(), 2);

        reducer.submit_operator(4.0, Subtract).unwrap();
        assert_eq!(reducer.depth(), 1);
        assert_eq!(reducer.operands()[0], 14.0);
        assert_eq!(reducer.operators(), &[Some(Subtract), None, None]);

        assert_eq!(reducer.equals(1.0).unwrap(), 13.0);
    }

    #[test]
    fn test_low_high_high_collapses_middle() {
        let mut reducer = ExpressionReducer::new();
        reducer.submit_operator(1.0, Add).unwrap();
        reducer.submit_operator(2.0, Multiply).unwrap();
        reducer.submit_operator(3.0, Multiply).unwrap();
        assert_eq!(reducer.depth(), 2);
        assert_eq!(reducer.operands()[..2], [1.0, 6.0]);
        assert_eq!(reducer.operators(), &[Some(Add), Some(Multiply), None]);

        assert_eq!(reducer.equals(4.0).unwrap(), 25.0);
    }

    #[test]
    fn test_long_mixed_chain() {
        // 1 + 2 * 3 * 4 - 5 / 5 + 6 = 30
        let result = evaluate(
            1.0,
            &[
                (Add, 2.0),
                (Multiply, 3.0),
                (Multiply, 4.0),
                (Subtract, 5.0),
                (Divide, 5.0),
                (Add, 6.0),
            ],
        );
        assert_eq!(result, 30.0);
    }

    #[test]
    fn test_depth_never_exceeds_two_at_rest() {
        let ops = Operator::ALL;
        for &a in &ops {
            for &b in &ops {
                for &c in &ops {
                    let mut reducer = ExpressionReducer::new();
                    for op in [a, b, c] {
                        reducer.submit_operator(2.0, op).unwrap();
                        assert!(reducer.depth() <= 2);
                        assert!(reducer.invariants_hold());
                    }
                }
            }
        }
    }

    #[test]
    fn test_equals_resets_pending_state() {
        let mut reducer = ExpressionReducer::new();
        reducer.submit_operator(2.0, Add).unwrap();
        reducer.submit_operator(3.0, Multiply).unwrap();
        reducer.equals(4.0).unwrap();

        assert_eq!(reducer.depth(), 0);
        assert_eq!(reducer.operators(), &[None, None, None]);
        assert_eq!(reducer.operands()[1..], [0.0, 0.0]);
    }

    #[test]
    fn test_equals_at_depth_zero_returns_value() {
        let mut reducer = ExpressionReducer::new();
        assert_eq!(reducer.equals(42.5).unwrap(), 42.5);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        assert_eq!(evaluate(5.0, &[(Divide, 0.0)]), f64::INFINITY);
        assert!(evaluate(0.0, &[(Divide, 0.0)]).is_nan());
        assert_eq!(evaluate(1.0, &[(Add, 5.0), (Divide, 0.0)]), f64::INFINITY);
    }

    #[test]
    fn test_full_clear() {
        let mut reducer = ExpressionReducer::new();
        reducer.submit_operator(2.0, Add).unwrap();
        reducer.submit_operator(3.0, Multiply).unwrap();
        reducer.full_clear();
        assert_eq!(reducer, ExpressionReducer::new());
        reducer.full_clear();
        assert_eq!(reducer, ExpressionReducer::new());
    }

    #[test]
    fn test_apply_without_operator() {
        let err = apply(1.0, 2.0, None).unwrap_err();
        assert!(matches!(err, CalcError::NoOperation));
        assert!(err.is_internal());
    }

    #[test]
    fn test_unexpected_layout_at_depth_three() {
        let mut reducer = ExpressionReducer {
            operands: [1.0, 2.0, 3.0],
            operators: [Some(Multiply), Some(Add), Some(Add)],
            depth: 3,
        };
        let err = reducer.reduce().unwrap_err();
        assert!(matches!(err, CalcError::UnexpectedState { depth: 3, .. }));
    }

    #[test]
    fn test_unreachable_depth() {
        let mut reducer = ExpressionReducer {
            operands: [1.0, 2.0, 3.0],
            operators: [Some(Add), Some(Multiply), Some(Add)],
            depth: 3,
        };
        assert!(matches!(
            reducer.equals(1.0),
            Err(CalcError::UnreachableDepth { depth: 3 })
        ));
        assert!(matches!(
            reducer.submit_operator(1.0, Add),
            Err(CalcError::UnreachableDepth { depth: 3 })
        ));
    }
}
