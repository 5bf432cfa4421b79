macro_rules! read_json {
	($ty:ty, $path:expr) => {{
		let path = ::std::path::PathBuf::from(&$path);
		let content = ::std::fs::read_to_string(&path)
			.unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
		let data: $ty = serde_json::from_str(&content)
			.unwrap_or_else(|e| panic!("Failed to deserialize {}: {}", path.display(), e));
		data
	}};
}

macro_rules! read_text {
	($path:expr) => {{
		let path = ::std::path::PathBuf::from(&$path);
		::std::fs::read_to_string(&path)
			.unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
	}};
}

macro_rules! unwrap_variant {
	($enm:ident, $variant:ident, $origin:expr) => {
		if let $enm::$variant(v) = $origin {
			v
		} else {
			panic!("Unexpected variant: {:?}", $origin)
		}
	};
}
