mod estimator;
mod prediction;
