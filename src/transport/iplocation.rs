use super::{HttpMethod, RequestDescriptor};
use crate::domain::{IpAddresses, LocateIp};

const LOCATION_TEMPLATE: &str = "/p3gw-mod-odg-iplocation/rest/<environment>/location";

pub fn encode_locate_ip(request: &LocateIp) -> RequestDescriptor {
    RequestDescriptor::new(HttpMethod::Get, LOCATION_TEMPLATE)
        .param(IpAddresses::FIELD, request.addresses().joined())
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;

    use super::*;

    #[test]
    fn addresses_are_comma_joined_into_the_query() {
        let addresses = IpAddresses::new(vec![
            IpAddr::from([193, 99, 144, 85]),
            "2001:db8::1".parse().unwrap(),
        ])
        .unwrap();
        let descriptor = encode_locate_ip(&LocateIp::new(addresses));
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(
            descriptor.params,
            vec![(
                "ipaddress".to_owned(),
                "193.99.144.85,2001:db8::1".to_owned()
            )]
        );
    }
}
