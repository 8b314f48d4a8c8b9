pub(crate) mod cmd_args;
