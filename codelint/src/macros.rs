macro_rules! generic_error {
	($($tokens:tt)*) => {
		$crate::AppError::Other(::anyhow::anyhow!($($tokens)*))
	};
}
