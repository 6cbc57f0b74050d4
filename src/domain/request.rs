use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AccountId, Attachment, ContentType, FileName, IpAddresses, MessageText, ModuleId, Originator,
    RawPhoneNumber, Recipients, Subject, ValidationKey,
};

#[derive(Debug, Clone, Default)]
pub struct SendSmsOptions {
    pub originator: Option<Originator>,
    /// Deliver as flash SMS (displayed immediately, not stored).
    pub flash: bool,
    pub account: Option<AccountId>,
}

#[derive(Debug, Clone)]
/// Send an SMS (or flash SMS) to one or more recipients.
pub struct SendSms {
    recipients: Recipients,
    message: MessageText,
    options: SendSmsOptions,
}

impl SendSms {
    pub fn new(
        recipients: impl Into<Recipients>,
        message: MessageText,
        options: SendSmsOptions,
    ) -> Self {
        Self {
            recipients: recipients.into(),
            message,
            options,
        }
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendSmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendValidationSmsOptions {
    /// At most 11 letters and digits; digits alone are rejected by the gateway.
    pub originator: Option<Originator>,
    pub account: Option<AccountId>,
}

#[derive(Debug, Clone)]
/// Send a validation code to a number so it can later be used as originator.
///
/// The message should contain the `#key#` and `#validUntil#` placeholders; otherwise the
/// gateway sends its default text.
pub struct SendValidationSms {
    number: RawPhoneNumber,
    message: MessageText,
    options: SendValidationSmsOptions,
}

impl SendValidationSms {
    pub fn new(
        number: RawPhoneNumber,
        message: MessageText,
        options: SendValidationSmsOptions,
    ) -> Self {
        Self {
            number,
            message,
            options,
        }
    }

    pub fn number(&self) -> &RawPhoneNumber {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendValidationSmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Confirm a number with the code it received.
pub struct ValidateNumber {
    number: RawPhoneNumber,
    key: ValidationKey,
}

impl ValidateNumber {
    pub fn new(number: RawPhoneNumber, key: ValidationKey) -> Self {
        Self { number, key }
    }

    pub fn number(&self) -> &RawPhoneNumber {
        &self.number
    }

    pub fn key(&self) -> &ValidationKey {
        &self.key
    }
}

#[derive(Debug, Clone, Default)]
pub struct SendMmsOptions {
    pub message: Option<MessageText>,
    pub attachment: Option<Attachment>,
    pub filename: Option<FileName>,
    pub content_type: Option<ContentType>,
    pub originator: Option<Originator>,
    pub account: Option<AccountId>,
}

#[derive(Debug, Clone)]
/// Send an MMS. At least one of `message` and `attachment` must be present.
pub struct SendMms {
    recipients: Recipients,
    subject: Subject,
    options: SendMmsOptions,
}

impl SendMms {
    pub fn new(
        recipients: impl Into<Recipients>,
        subject: Subject,
        options: SendMmsOptions,
    ) -> Result<Self, ValidationError> {
        if options.message.is_none() && options.attachment.is_none() {
            return Err(ValidationError::MissingContent {
                fields: &[MessageText::FIELD, Attachment::FIELD],
            });
        }
        Ok(Self {
            recipients: recipients.into(),
            subject,
            options,
        })
    }

    pub fn recipients(&self) -> &Recipients {
        &self.recipients
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn options(&self) -> &SendMmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy)]
/// Change the maximum daily quota of a module.
pub struct SetQuota {
    module: ModuleId,
    value: u32,
}

impl SetQuota {
    pub const VALUE_FIELD: &'static str = "value";

    pub fn new(module: ModuleId, value: u32) -> Self {
        Self { module, value }
    }

    pub fn module(&self) -> ModuleId {
        self.module
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

#[derive(Debug, Clone, Default)]
/// Query the balance of the main account, or of a sub-account when given.
pub struct AccountBalance {
    pub account: Option<AccountId>,
}

#[derive(Debug, Clone)]
/// Look up location information for IP addresses.
pub struct LocateIp {
    addresses: IpAddresses,
}

impl LocateIp {
    pub fn new(addresses: impl Into<IpAddresses>) -> Self {
        Self {
            addresses: addresses.into(),
        }
    }

    pub fn addresses(&self) -> &IpAddresses {
        &self.addresses
    }
}
