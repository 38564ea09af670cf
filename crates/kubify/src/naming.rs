use kubify_core::NameGenerator;
use uuid::Uuid;

/// `app-<uuid>` 形式の名前を生成する
///
/// Service名は英小文字で始まる必要があるので接頭辞を付ける。
pub struct UuidNameGenerator;

impl NameGenerator for UuidNameGenerator {
    fn generate(&self) -> String {
        format!("app-{}", Uuid::new_v4().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kubify_core::is_dns_label;

    #[test]
    fn test_generated_names_are_valid_and_unique() {
        let first = UuidNameGenerator.generate();
        let second = UuidNameGenerator.generate();

        assert!(first.starts_with("app-"));
        assert!(is_dns_label(&first));
        assert_ne!(first, second);
    }
}
