mod money;
mod payment_method;
mod user;
