//! File contents of a freshly generated React Native project.

pub const PACKAGE_JSON: &str = r#"{
  "name": "AwesomeProject",
  "version": "0.0.1",
  "private": true,
  "scripts": {
    "start": "node node_modules/react-native/local-cli/cli.js start",
    "test": "jest"
  },
  "dependencies": {
    "react": "16.0.0",
    "react-native": "0.51.0"
  }
}
"#;

pub const INDEX_JS: &str = "import { AppRegistry } from 'react-native';\n\
                            import App from './App';\n\
                            \n\
                            AppRegistry.registerComponent('AwesomeProject', () => App);\n";

pub const APP_JS: &str = "import React, { Component } from 'react';\n\
                          import { Text } from 'react-native';\n\
                          \n\
                          export default class App extends Component {\n\
                          \x20 render() {\n\
                          \x20   return <Text>Hello</Text>;\n\
                          \x20 }\n\
                          }\n";

pub const BUILD_TS_COMMAND: &str =
    "concurrently -r \"tsc -w\" node_modules/react-native/local-cli/cli.js start";
