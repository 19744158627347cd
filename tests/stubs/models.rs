pub const REBOOT_YIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="reboot"
        xmlns="urn:ietf:params:xml:ns:yang:yin:1"
        xmlns:rb="urn:example:reboot">
  <namespace uri="urn:example:reboot"/>
  <prefix value="rb"/>
  <container name="system">
    <leaf name="hostname">
      <type name="string"/>
    </leaf>
  </container>
  <rpc name="reboot">
    <description>
      <text>Restart the device.</text>
    </description>
    <input>
      <leaf name="delay">
        <type name="uint32"/>
      </leaf>
      <leaf name="force">
        <type name="boolean"/>
      </leaf>
    </input>
  </rpc>
  <rpc name="get-time">
    <output>
      <leaf name="time">
        <type name="string"/>
      </leaf>
    </output>
  </rpc>
</module>
"#;

pub const NO_RPC_YIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="clock" xmlns="urn:ietf:params:xml:ns:yang:yin:1">
  <container name="clock">
    <leaf name="timezone">
      <type name="string"/>
    </leaf>
  </container>
</module>
"#;

pub const SYSTEM_YIN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="system" xmlns="urn:ietf:params:xml:ns:yang:yin:1">
  <rpc name="set-current-datetime">
    <input>
      <leaf name="current-datetime">
        <type name="string"/>
      </leaf>
    </input>
  </rpc>
  <rpc name="system-restart"/>
  <rpc name="system-shutdown"/>
  <augment target-node="/system">
    <rpc name="set_current_datetime">
      <input>
        <leaf name="input"/>
        <leaf name="mode"/>
        <container name="options"/>
        <leaf-list name="tags"/>
      </input>
    </rpc>
  </augment>
</module>
"#;
