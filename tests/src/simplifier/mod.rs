mod evaluator;
mod rules;
