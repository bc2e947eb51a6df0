//! Java snippets bundled with the service so the front-end can demo each analysis category.

pub const VULNERABLE_SAMPLE: &str = r#"import java.sql.*;

public class VulnerableCode {
    public void getUserData(String userId) {
        Connection conn = null;
        Statement stmt = null;
        ResultSet rs = null;

        try {
            conn = DriverManager.getConnection("jdbc:mysql://localhost:3306/mydb", "root", "password123");
            stmt = conn.createStatement();

            // Dangerous: SQL injection
            String query = "SELECT * FROM users WHERE id = '" + userId + "'";
            rs = stmt.executeQuery(query);

            // Dangerous: hard-coded password
            String adminPassword = "admin123";

            while (rs.next()) {
                System.out.println("User: " + rs.getString("username"));
            }

        } catch (SQLException e) {
            e.printStackTrace();
        } finally {
            // resources may not be closed
        }
    }

    public void executeCommand(String input) {
        try {
            // Dangerous: command injection
            Runtime.getRuntime().exec("ping " + input);
        } catch (Exception e) {
            e.printStackTrace();
        }
    }
}"#;

pub const PERFORMANCE_SAMPLE: &str = r#"import java.util.*;

public class PerformanceIssues {
    public void stringConcatenation() {
        String result = "";

        // Slow: string concatenation inside a loop
        for (int i = 0; i < 1000; i++) {
            result += "data" + i; // should use StringBuilder
        }
    }

    public void inefficientCollections() {
        List<String> list = new ArrayList<>();

        // Slow: repeated resizing
        for (int i = 0; i < 10000; i++) {
            list.add("item" + i);
        }

        // Slow: needless boxing and unboxing
        Integer sum = 0;
        for (int i = 0; i < 1000; i++) {
            sum += i; // autoboxing overhead
        }
    }

    public void objectCreationInLoop() {
        List<Date> dates = new ArrayList<>();

        // Slow: object creation inside a loop
        for (int i = 0; i < 1000; i++) {
            SimpleDateFormat sdf = new SimpleDateFormat("yyyy-MM-dd");
            dates.add(new Date());
        }
    }
}"#;

pub const BUGGY_SAMPLE: &str = r#"import java.io.*;

public class BuggyCode {
    public void potentialNPE(String input) {
        // Bug: may throw NullPointerException
        if (input.equals("test")) {
            System.out.println("Found test");
        }
    }

    public void resourceLeak() {
        FileInputStream fis = null;

        try {
            fis = new FileInputStream("test.txt");
            // process the file...

            // Bug: the stream is not closed when this throws
            if (someCondition()) {
                throw new IOException("Test exception");
            }

            fis.close();
        } catch (IOException e) {
            e.printStackTrace();
        }
        // no cleanup block closes the stream
    }

    public void concurrentIssue() {
        List<String> list = new ArrayList<>();

        // Race: ArrayList is not thread-safe
        Runnable task = () -> {
            list.add("item");
        };

        new Thread(task).start();
        new Thread(task).start();
    }

    private boolean someCondition() {
        return Math.random() > 0.5;
    }
}"#;

pub const STYLE_SAMPLE: &str = r#"public class StyleViolations {
    private String MY_CONSTANT = "constant"; // naming: constants should be static final

    public void longMethod() {
        // This method is too long and does too many things
        int a = 1;
        int b = 2;
        int c = 3;
        int d = 4;
        int e = 5;
        int f = 6;
        int g = 7;
        int h = 8;
        int i = 9;
        int j = 10;
        int k = 11;
        int l = 12;
        int m = 13;
        int n = 14;
        int o = 15;
        int p = 16;
        int q = 17;
        int r = 18;
        int s = 19;
        int t = 20;
        int u = 21;
        int v = 22;
        int w = 23;
        int x = 24;
        int y = 25;
        int z = 26;

        // Duplicated code
        System.out.println("Processing " + a);
        System.out.println("Processing " + b);
        System.out.println("Processing " + c);
    }

    public void complexLogic() {
        // Deeply nested conditions raise cyclomatic complexity
        if (condition1()) {
            if (condition2()) {
                for (int i = 0; i < 10; i++) {
                    while (condition3()) {
                        switch (i) {
                            case 1: break;
                            case 2: break;
                            default: break;
                        }
                    }
                }
            }
        } else if (condition4()) {
            try {
                // complicated error handling
            } catch (Exception e) {
                // empty catch block
            }
        }
    }

    private boolean condition1() { return true; }
    private boolean condition2() { return true; }
    private boolean condition3() { return true; }
    private boolean condition4() { return true; }
}"#;

/// Sample names in the order the front-end lists them.
pub const SAMPLES: &[(&str, &str)] = &[
    ("vulnerable", VULNERABLE_SAMPLE),
    ("performance", PERFORMANCE_SAMPLE),
    ("buggy", BUGGY_SAMPLE),
    ("style", STYLE_SAMPLE),
];

pub fn find_sample(name: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|(sample_name, _)| *sample_name == name)
        .map(|(_, code)| *code)
}
