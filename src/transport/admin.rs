use super::{HttpMethod, RequestDescriptor};
use crate::domain::{AccountBalance, AccountId, ModuleId, SetQuota};

const QUOTA_TEMPLATE: &str = "/p3gw-mod-odg-admin/rest/<environment>/quotainfo";
const BALANCE_TEMPLATE: &str = "/p3gw-mod-odg-admin/rest/<environment>/account/balance";

/// The admin service names the sub-account `accountID`, unlike the messaging services.
const BALANCE_ACCOUNT_FIELD: &str = "accountID";

pub fn encode_quota(module: ModuleId) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Get, QUOTA_TEMPLATE).with_path_segment(module.as_str())
}

pub fn encode_set_quota(request: &SetQuota) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Put, QUOTA_TEMPLATE)
        .with_path_segment(request.module().as_str())
        .param(SetQuota::VALUE_FIELD, request.value().to_string())
}

pub fn encode_account_balance(request: &AccountBalance) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Post, BALANCE_TEMPLATE).param_opt(
        BALANCE_ACCOUNT_FIELD,
        request.account.as_ref().map(AccountId::as_str),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_uses_module_id_as_path_segment() {
        let descriptor = encode_quota(ModuleId::SmsSandbox);
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(descriptor.path_segment.as_deref(), Some("SmsSandbox"));
        assert!(descriptor.params.is_empty());
    }

    #[test]
    fn set_quota_is_a_put_with_value() {
        let descriptor = encode_set_quota(&SetQuota::new(ModuleId::MmsProduction, 250));
        assert_eq!(descriptor.method, HttpMethod::Put);
        assert_eq!(descriptor.path_segment.as_deref(), Some("MmsProduction"));
        assert_eq!(
            descriptor.params,
            vec![("value".to_owned(), "250".to_owned())]
        );
    }

    #[test]
    fn account_balance_sub_account_is_optional() {
        let main = encode_account_balance(&AccountBalance::default());
        assert_eq!(main.method, HttpMethod::Post);
        assert!(main.params.is_empty());

        let sub = encode_account_balance(&AccountBalance {
            account: Some(AccountId::new("sub-7").unwrap()),
        });
        assert_eq!(
            sub.params,
            vec![("accountID".to_owned(), "sub-7".to_owned())]
        );
    }
}
