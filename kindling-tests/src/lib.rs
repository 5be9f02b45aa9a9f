pub mod strategies;

#[cfg(test)]
mod eval_props;
#[cfg(test)]
mod functor_laws;
