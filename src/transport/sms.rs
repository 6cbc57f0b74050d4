use super::{HttpMethod, RequestDescriptor};
use crate::domain::{
    AccountId, MessageText, Originator, RawPhoneNumber, Recipients, SendSms, SendValidationSms,
    ValidateNumber, ValidationKey,
};

const SEND_SMS_TEMPLATE: &str = "/p3gw-mod-odg-sms/rest/<environment>/sms";
const SEND_VALIDATION_TEMPLATE: &str = "/p3gw-mod-odg-sms-validation/rest/<environment>/send";
const VALIDATED_NUMBERS_TEMPLATE: &str =
    "/p3gw-mod-odg-sms-validation/rest/<environment>/validatednumbers";

const FLASH_FIELD: &str = "flash";

pub fn encode_send_sms(request: &SendSms) -> RequestDescriptor {
    let options = request.options();
    let descriptor = RequestDescriptor::new(HttpMethod::Post, SEND_SMS_TEMPLATE)
        .param(Recipients::FIELD, request.recipients().joined())
        .param(MessageText::FIELD, request.message().as_str())
        .param_opt(
            Originator::FIELD,
            options.originator.as_ref().map(Originator::as_str),
        );

    let descriptor = if options.flash {
        descriptor.param(FLASH_FIELD, "true")
    } else {
        descriptor
    };

    descriptor.param_opt(
        AccountId::FIELD,
        options.account.as_ref().map(AccountId::as_str),
    )
}

pub fn encode_send_validation_sms(request: &SendValidationSms) -> RequestDescriptor {
    let options = request.options();
    RequestDescriptor::new(HttpMethod::Post, SEND_VALIDATION_TEMPLATE)
        .param(RawPhoneNumber::FIELD, request.number().raw())
        .param(MessageText::FIELD, request.message().as_str())
        .param_opt(
            Originator::FIELD,
            options.originator.as_ref().map(Originator::as_str),
        )
        .param_opt(
            AccountId::FIELD,
            options.account.as_ref().map(AccountId::as_str),
        )
}

pub fn encode_validate_number(request: &ValidateNumber) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Post, VALIDATED_NUMBERS_TEMPLATE)
        .with_path_segment(request.number().raw())
        .param(ValidationKey::FIELD, request.key().as_str())
}

pub fn encode_invalidate_number(number: &RawPhoneNumber) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Delete, VALIDATED_NUMBERS_TEMPLATE)
        .with_path_segment(number.raw())
}

pub fn encode_validated_numbers() -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Get, VALIDATED_NUMBERS_TEMPLATE)
}

#[cfg(test)]
mod tests {
    use crate::domain::{SendSmsOptions, SendValidationSmsOptions};

    use super::*;

    fn pairs(descriptor: &RequestDescriptor) -> Vec<(&str, &str)> {
        descriptor
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn send_sms_with_all_options() {
        let recipients = Recipients::new(vec![
            RawPhoneNumber::new("+4915111111111").unwrap(),
            RawPhoneNumber::new("+4915122222222").unwrap(),
        ])
        .unwrap();
        let options = SendSmsOptions {
            originator: Some(Originator::new("ACME").unwrap()),
            flash: true,
            account: Some(AccountId::new("sub-1").unwrap()),
        };
        let request = SendSms::new(recipients, MessageText::new("hello").unwrap(), options);

        let descriptor = encode_send_sms(&request);
        assert_eq!(descriptor.method, HttpMethod::Post);
        assert_eq!(descriptor.url_template, SEND_SMS_TEMPLATE);
        assert_eq!(
            pairs(&descriptor),
            vec![
                ("number", "+4915111111111,+4915122222222"),
                ("message", "hello"),
                ("originator", "ACME"),
                ("flash", "true"),
                ("account", "sub-1"),
            ]
        );
    }

    #[test]
    fn send_sms_omits_absent_options() {
        let request = SendSms::new(
            RawPhoneNumber::new("+4915111111111").unwrap(),
            MessageText::new("hello").unwrap(),
            SendSmsOptions::default(),
        );
        assert_eq!(
            pairs(&encode_send_sms(&request)),
            vec![("number", "+4915111111111"), ("message", "hello")]
        );
    }

    #[test]
    fn send_validation_sms_params() {
        let request = SendValidationSms::new(
            RawPhoneNumber::new("+4915111111111").unwrap(),
            MessageText::new("Your key is #key#, valid until #validUntil#").unwrap(),
            SendValidationSmsOptions {
                originator: Some(Originator::new("ACME").unwrap()),
                account: None,
            },
        );
        let descriptor = encode_send_validation_sms(&request);
        assert_eq!(descriptor.url_template, SEND_VALIDATION_TEMPLATE);
        assert_eq!(
            pairs(&descriptor),
            vec![
                ("number", "+4915111111111"),
                ("message", "Your key is #key#, valid until #validUntil#"),
                ("originator", "ACME"),
            ]
        );
    }

    #[test]
    fn validation_lifecycle_descriptors() {
        let number = RawPhoneNumber::new("+4915111111111").unwrap();

        let validate = encode_validate_number(&ValidateNumber::new(
            number.clone(),
            ValidationKey::new("A3B5DG").unwrap(),
        ));
        assert_eq!(validate.method, HttpMethod::Post);
        assert_eq!(validate.path_segment.as_deref(), Some("+4915111111111"));
        assert_eq!(pairs(&validate), vec![("key", "A3B5DG")]);

        let invalidate = encode_invalidate_number(&number);
        assert_eq!(invalidate.method, HttpMethod::Delete);
        assert_eq!(invalidate.path_segment.as_deref(), Some("+4915111111111"));
        assert!(invalidate.params.is_empty());

        let list = encode_validated_numbers();
        assert_eq!(list.method, HttpMethod::Get);
        assert_eq!(list.path_segment, None);
    }
}
