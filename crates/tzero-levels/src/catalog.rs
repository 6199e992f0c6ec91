//! The authored level table.
//!
//! Pure data: sixty levels across six tracks of ten. Unauthored ids fall
//! back to a placeholder so the engine never has to handle a missing level.

use tzero_types::Level;

/// Level metadata for `id`, or the placeholder for unknown ids.
pub fn level_data(id: u32) -> Level {
    match id {
        1 => Level::new(
            1,
            "First Steps",
            "Welcome to Terminal Zero! Let's start with the basics. Your first task is to read a file.",
            "Terminal Basics",
            &["Use the 'cat' command to read the contents of 'secret.txt'"],
            &["Type 'cat secret.txt' to display the contents of the file"],
            &["help", "ls", "cat", "clear"],
            "Read the contents of secret.txt",
        ),
        2 => Level::new(
            2,
            "Hidden Files",
            "Files that start with a dot (.) are hidden by default. Your task is to find and read a hidden file.",
            "Terminal Basics",
            &[
                "List all files including hidden ones",
                "Read the contents of the hidden file",
            ],
            &[
                "Use 'ls -a' to show all files including hidden ones",
                "Hidden files start with a dot (.)",
                "Use 'cat' to read the file once you find it",
            ],
            &["help", "ls", "cat", "clear"],
            "Read the contents of the hidden .config file",
        ),
        3 => Level::new(
            3,
            "File Permissions",
            "Files have permissions that control who can read, write, or execute them. Your task is to change permissions on a file.",
            "Terminal Basics",
            &[
                "Change the permissions of 'locked.txt' to make it readable",
                "Read the contents of the file",
            ],
            &[
                "Use 'chmod +r locked.txt' to add read permissions",
                "Alternatively, use 'chmod 644 locked.txt'",
                "Then use 'cat locked.txt' to read it",
            ],
            &["help", "ls", "cat", "chmod", "clear"],
            "Change permissions and read locked.txt",
        ),
        4 => Level::new(
            4,
            "Executable Files",
            "Scripts need to be executable before they can be run. Your task is to make a script executable and run it.",
            "Terminal Basics",
            &["Make 'script.sh' executable", "Run the script"],
            &[
                "Use 'chmod +x script.sh' to make the script executable",
                "Run the script with './script.sh'",
            ],
            &["help", "ls", "cat", "chmod", "clear", "./script.sh"],
            "Make script.sh executable and run it",
        ),
        5 => Level::new(
            5,
            "Archives",
            "Files are often compressed into archives for storage or transfer. Your task is to extract an archive.",
            "Terminal Basics",
            &["Extract the contents of 'backup.tar.gz'", "Read the extracted file"],
            &[
                "Use 'tar -xzf backup.tar.gz' to extract the archive",
                "The -x flag extracts, -z handles gzip compression, and -f specifies the file",
                "After extraction, use 'cat' to read any extracted files",
            ],
            &["help", "ls", "cat", "tar", "clear"],
            "Extract backup.tar.gz and read its contents",
        ),
        6 => Level::new(
            6,
            "Finding Files",
            "When you don't know where a file is located, you can search for it. Your task is to find and read a hidden file somewhere in the system.",
            "Terminal Basics",
            &["Find a file named 'secret_file.txt'", "Read its contents"],
            &[
                "Use 'find / -name secret_file.txt' to search for the file",
                "The '/' tells find to start from the root directory",
                "Once found, use 'cat' to read the file",
            ],
            &["help", "ls", "cat", "find", "clear"],
            "Find and read secret_file.txt",
        ),
        7 => Level::new(
            7,
            "Searching in Files",
            "Sometimes you need to find specific content within files. Your task is to find a password in log files.",
            "Terminal Basics",
            &[
                "Search for the word 'password' in all text files",
                "Find the actual password",
            ],
            &[
                "Use 'grep password *.txt' to search for 'password' in all text files",
                "Look carefully at the results to find the actual password",
            ],
            &["help", "ls", "cat", "grep", "clear"],
            "Find the password in the log files",
        ),
        8 => Level::new(
            8,
            "Command Chaining",
            "Commands can be chained together using pipes (|) to process data. Your task is to count the number of files in a directory.",
            "Terminal Basics",
            &["List all files in the directory", "Count the number of files"],
            &[
                "Use 'ls' to list files",
                "Use 'wc -l' to count lines",
                "Chain them with a pipe: ls | wc -l",
            ],
            &["help", "ls", "wc", "clear"],
            "Count the number of files in the directory",
        ),
        9 => Level::new(
            9,
            "Environment Variables",
            "Environment variables store information that can be used by commands and scripts. Your task is to find a secret stored in an environment variable.",
            "Terminal Basics",
            &["Display all environment variables", "Find the secret variable"],
            &[
                "Use 'env' to display all environment variables",
                "Look for a variable named 'SECRET'",
            ],
            &["help", "ls", "cat", "env", "clear"],
            "Find the SECRET environment variable",
        ),
        10 => Level::new(
            10,
            "Debugging Code",
            "Programmers often need to fix bugs in code. Your task is to fix a broken JavaScript function.",
            "Terminal Basics",
            &[
                "Edit script.js to fix the add function",
                "Run the script to verify it works",
            ],
            &[
                "Use 'sudo edit script.js' to edit the file",
                "The function should return a + b, not a - b",
                "After fixing, run with 'node script.js'",
            ],
            &["help", "ls", "cat", "sudo", "nano", "node", "clear"],
            "Fix the add function and run the script",
        ),
        11 => Level::new(
            11,
            "JavaScript Arrays",
            "Learn to manipulate arrays in JavaScript. Your task is to fix a script that should reverse an array.",
            "Programming Logic",
            &[
                "Edit array.js to use the array.reverse() method",
                "Run the script to verify it works",
            ],
            &[
                "Use 'sudo edit array.js' to edit the file",
                "Find the line where you need to reverse the array",
                "Use the array.reverse() method to reverse the array",
                "After fixing, run with 'node array.js'",
            ],
            &["help", "ls", "cat", "sudo", "edit", "node", "clear"],
            "Fix the array reversal and run the script",
        ),
        12 => Level::new(
            12,
            "JSON Parsing",
            "Parse a JSON file to extract sensitive information.",
            "Programming Logic",
            &["Write code to parse data.json", "Extract the admin password"],
            &[
                "Use 'cat data.json' to view the JSON data",
                "Create a script that uses JSON.parse()",
                "Look for the admin user in the users array",
                "Run your script with 'node parse.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Extract the admin password from data.json",
        ),
        13 => Level::new(
            13,
            "Regular Expressions",
            "Use regular expressions to extract information from text.",
            "Programming Logic",
            &["Extract an email address and phone number from text"],
            &[
                "Use 'cat text.txt' to view the text",
                "Create a regex for email addresses like /\\w+@\\w+\\.\\w+/",
                "Create a regex for phone numbers like /\\d{3}-\\d{3}-\\d{4}/",
                "Use 'extract' or 'regex' command with the patterns",
            ],
            &["help", "ls", "cat", "extract", "regex", "clear", "nano", "node"],
            "Extract both the email and phone number",
        ),
        14 => Level::new(
            14,
            "Loops",
            "Create a loop that prints numbers from 1 to 10.",
            "Programming Logic",
            &[
                "Create a JavaScript file with a loop",
                "Run the script to print numbers 1-10",
            ],
            &[
                "Use a for loop: for(let i=1; i<=10; i++)",
                "Print each number with console.log(i)",
                "Save your code in loop.js",
                "Run with 'node loop.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Create and run a loop that prints 1-10",
        ),
        15 => Level::new(
            15,
            "Python Debugging",
            "Fix a broken Python script that should print 'Hello'.",
            "Programming Logic",
            &[
                "Fix the syntax error in broken.py",
                "Run the script to verify it works",
            ],
            &[
                "Use 'cat broken.py' to view the code",
                "Look for missing colons, incorrect indentation, or mismatched quotes",
                "After fixing, run with 'python broken.py'",
            ],
            &["help", "ls", "cat", "python", "clear", "nano"],
            "Fix and run broken.py",
        ),
        16 => Level::new(
            16,
            "Array Sorting",
            "Create a script that sorts an array of numbers.",
            "Programming Logic",
            &[
                "Create a JavaScript file that sorts an array",
                "Run the script to verify it works",
            ],
            &[
                "Create an array: const arr = [5, 3, 8, 1, 2, 4]",
                "Use the sort method with a compare function",
                "Save your code in sort.js",
                "Run with 'node sort.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Create and run a script that sorts an array",
        ),
        17 => Level::new(
            17,
            "Array Filtering",
            "Create a script that filters an array to get only odd numbers.",
            "Programming Logic",
            &[
                "Create a JavaScript file that filters an array",
                "Run the script to verify it works",
            ],
            &[
                "Create an array: const arr = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]",
                "Use the filter method to keep only odd numbers",
                "Save your code in filter.js",
                "Run with 'node filter.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Create and run a script that filters an array",
        ),
        18 => Level::new(
            18,
            "Base64 Decoding",
            "Create a script that decodes a Base64 encoded string.",
            "Programming Logic",
            &[
                "Create a JavaScript file that decodes a Base64 string",
                "Run the script to verify it works",
            ],
            &[
                "Use Buffer.from(encodedString, 'base64').toString() to decode",
                "The encoded string is: SGVsbG8gSGFja2VyIQ==",
                "Save your code in decode.js",
                "Run with 'node decode.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Create and run a script that decodes a Base64 string",
        ),
        19 => Level::new(
            19,
            "API Payload Modification",
            "Modify a JSON payload to gain admin privileges.",
            "Web Hacking",
            &[
                "Modify a JSON payload to add admin privileges",
                "Submit the modified payload",
            ],
            &[
                "The original payload is: {\"username\":\"admin\",\"password\":\"REDACTED\"}",
                "Add an 'admin' field set to true",
                "Use the 'modify' command to submit your payload",
            ],
            &["help", "ls", "cat", "modify", "clear"],
            "Modify the JSON payload to gain admin privileges",
        ),
        20 => Level::new(
            20,
            "Password Cracking",
            "Create a script that identifies a password from its MD5 hash.",
            "Cryptography",
            &[
                "Create a JavaScript file that identifies a password from its hash",
                "Run the script to verify it works",
            ],
            &[
                "The MD5 hash is: 5f4dcc3b5aa765d61d8327deb882cf99",
                "This is a common password",
                "Save your code in hash.js",
                "Run with 'node hash.js'",
            ],
            &["help", "ls", "cat", "node", "clear", "nano"],
            "Create and run a script that identifies a password from its hash",
        ),
        21 => Level::new(
            21,
            "HTTP Requests",
            "Make an HTTP request to a web server.",
            "Web Hacking",
            &["Use curl to make an HTTP request to example.com"],
            &[
                "Use 'curl example.com' to make a GET request",
                "Examine the response to see the HTML content",
            ],
            &["help", "ls", "cat", "curl", "clear"],
            "Make an HTTP request to example.com",
        ),
        22 => Level::new(
            22,
            "Cookie Analysis",
            "Analyze a cookie to understand its purpose.",
            "Web Hacking",
            &["Analyze a session cookie", "Identify its purpose"],
            &[
                "Use the 'analyze' command with 'cookie' and 'session' parameters",
                "Look for patterns in the cookie value",
            ],
            &["help", "ls", "cat", "analyze", "clear"],
            "Analyze the session cookie",
        ),
        23 => Level::new(
            23,
            "HTTP POST Requests",
            "Send a POST request to a login endpoint.",
            "Web Hacking",
            &["Use curl to send a POST request to /login"],
            &[
                "Use 'curl -X POST /login' to send a POST request",
                "Examine the response to see the redirect and cookie",
            ],
            &["help", "ls", "cat", "curl", "clear"],
            "Send a POST request to /login",
        ),
        24 => Level::new(
            24,
            "Cookie Manipulation",
            "Modify a cookie to escalate privileges.",
            "Web Hacking",
            &[
                "Decode a cookie",
                "Modify it to gain admin access",
                "Encode it again",
            ],
            &[
                "The cookie contains JSON: {\"user\":\"guest\"}",
                "Change 'guest' to 'admin'",
                "Use the 'decode' command with 'admin' parameter",
            ],
            &["help", "ls", "cat", "decode", "clear"],
            "Modify the cookie to gain admin access",
        ),
        25 => Level::new(
            25,
            "SQL Injection",
            "Exploit a SQL injection vulnerability to bypass authentication.",
            "Web Hacking",
            &["Craft a SQL injection payload", "Bypass authentication"],
            &[
                "The login query is: SELECT * FROM users WHERE username = '[INPUT]' AND password = '[INPUT]'",
                "Use the classic OR 1=1 technique",
                "Try: ' OR '1'='1",
                "Use the 'inject' command with your payload",
            ],
            &["help", "ls", "cat", "inject", "clear"],
            "Bypass authentication with SQL injection",
        ),
        26 => Level::new(
            26,
            "Cross-Site Scripting (XSS)",
            "Exploit an XSS vulnerability to execute JavaScript in a browser.",
            "Web Hacking",
            &["Craft an XSS payload", "Execute JavaScript in the browser"],
            &[
                "The input is directly inserted into: <div>Welcome, <!--INPUT--></div>",
                "Try a simple script tag: <script>alert('XSS')</script>",
                "Use the 'inject' command with your payload",
            ],
            &["help", "ls", "cat", "inject", "clear"],
            "Execute JavaScript with XSS",
        ),
        27 => Level::new(
            27,
            "API Authentication",
            "Send an authenticated request to an API using a Bearer token.",
            "Web Hacking",
            &["Send a request with a Bearer token in the Authorization header"],
            &[
                "Use 'curl' with the '-H' flag to add headers",
                "The header should be: Authorization: Bearer [token]",
                "Any token value will work for this exercise",
            ],
            &["help", "ls", "cat", "curl", "clear"],
            "Send an authenticated request with a Bearer token",
        ),
        28 => Level::new(
            28,
            "CORS Analysis",
            "Analyze CORS headers to identify security risks.",
            "Web Hacking",
            &["Analyze CORS headers", "Identify security risks"],
            &[
                "The server has the header: Access-Control-Allow-Origin: *",
                "This allows any website to make cross-origin requests",
                "Use the 'analyze' command with 'CORS' parameter",
            ],
            &["help", "ls", "cat", "analyze", "clear"],
            "Analyze CORS headers and identify risks",
        ),
        29 => Level::new(
            29,
            "JWT Tampering",
            "Modify a JWT to escalate privileges.",
            "Web Hacking",
            &[
                "Decode a JWT",
                "Modify it to gain admin access",
                "Encode it again",
            ],
            &[
                "The JWT payload contains: {\"user\":\"guest\",\"role\":\"user\"}",
                "Change 'role' to 'admin'",
                "Use the 'decode' command with 'admin' parameter",
            ],
            &["help", "ls", "cat", "decode", "clear"],
            "Modify the JWT to gain admin access",
        ),
        30 => Level::new(
            30,
            "Client-Side Bypass",
            "Bypass client-side security controls to access an admin panel.",
            "Web Hacking",
            &[
                "Identify client-side security controls",
                "Bypass them to access the admin panel",
            ],
            &[
                "The admin panel is hidden with CSS: display:none",
                "This can be bypassed by modifying the DOM",
                "Use the 'bypass' command with 'admin' parameter",
            ],
            &["help", "ls", "cat", "bypass", "clear"],
            "Bypass client-side controls to access the admin panel",
        ),
        31 => Level::new(
            31,
            "Network Scanning",
            "Scan a network to discover hosts and open ports.",
            "Networking",
            &["Scan a network range", "Identify hosts and open ports"],
            &[
                "Use 'nmap' to scan a network",
                "The target network is 192.168.1.0/24",
                "Look for hosts with open ports",
            ],
            &["help", "ls", "cat", "nmap", "clear"],
            "Scan a network and identify hosts",
        ),
        32 => Level::new(
            32,
            "Packet Analysis",
            "Analyze network packets to identify suspicious traffic.",
            "Networking",
            &["Analyze packet captures", "Identify suspicious traffic"],
            &[
                "Use 'tcpdump' to analyze packets",
                "Look for unusual port numbers or protocols",
                "Filter for specific traffic types",
            ],
            &["help", "ls", "cat", "tcpdump", "clear"],
            "Analyze packets and identify suspicious traffic",
        ),
        33 => Level::new(
            33,
            "DNS Enumeration",
            "Enumerate DNS records to gather information about a domain.",
            "Networking",
            &["Query DNS records", "Gather information about a domain"],
            &[
                "Use 'dig' or 'nslookup' to query DNS records",
                "Look for A, MX, NS, and TXT records",
                "The target domain is example.com",
            ],
            &["help", "ls", "cat", "dig", "nslookup", "clear"],
            "Enumerate DNS records for a domain",
        ),
        34 => Level::new(
            34,
            "ARP Spoofing",
            "Perform an ARP spoofing attack to intercept network traffic.",
            "Networking",
            &["Configure ARP spoofing", "Intercept traffic between two hosts"],
            &[
                "Use 'arpspoof' to perform the attack",
                "Target IP addresses are 192.168.1.1 and 192.168.1.2",
                "Enable IP forwarding to avoid disrupting traffic",
            ],
            &["help", "ls", "cat", "arpspoof", "clear"],
            "Perform ARP spoofing to intercept traffic",
        ),
        35 => Level::new(
            35,
            "Firewall Configuration",
            "Configure a firewall to allow specific traffic and block the rest.",
            "Networking",
            &[
                "Configure firewall rules",
                "Allow specific traffic and block the rest",
            ],
            &[
                "Use 'iptables' to configure the firewall",
                "Allow SSH (port 22) and HTTP (port 80)",
                "Block all other incoming traffic",
            ],
            &["help", "ls", "cat", "iptables", "clear"],
            "Configure firewall rules correctly",
        ),
        36 => Level::new(
            36,
            "Network Monitoring",
            "Set up network monitoring to detect unusual traffic patterns.",
            "Networking",
            &[
                "Configure network monitoring",
                "Detect unusual traffic patterns",
            ],
            &[
                "Use 'netstat' to monitor network connections",
                "Look for connections to unusual ports",
                "Set up alerts for suspicious activity",
            ],
            &["help", "ls", "cat", "netstat", "clear"],
            "Set up network monitoring and detect unusual traffic",
        ),
        37 => Level::new(
            37,
            "VPN Configuration",
            "Configure a VPN to secure network traffic.",
            "Networking",
            &[
                "Set up a VPN server",
                "Configure a VPN client",
                "Test the connection",
            ],
            &[
                "Use OpenVPN for the VPN server",
                "Configure the client with the server's certificate",
                "Test the connection by accessing a resource through the VPN",
            ],
            &["help", "ls", "cat", "openvpn", "clear"],
            "Configure a VPN and test the connection",
        ),
        38 => Level::new(
            38,
            "SSH Configuration",
            "Configure SSH for secure remote access.",
            "Networking",
            &[
                "Set up SSH key-based authentication",
                "Connect to a remote server",
            ],
            &[
                "Generate SSH keys with ssh-keygen",
                "Copy the public key to the server",
                "Connect using 'ssh -i key.pem admin@192.168.1.100'",
            ],
            &["help", "ls", "cat", "ssh", "ssh-keygen", "clear"],
            "Configure SSH and connect to a remote server",
        ),
        39 => Level::new(
            39,
            "Network Traffic Analysis",
            "Analyze network traffic to identify data exfiltration.",
            "Networking",
            &["Analyze network traffic", "Identify data exfiltration"],
            &[
                "Use 'wireshark' or 'tcpdump' to capture traffic",
                "Look for large outbound transfers",
                "Check for unusual destinations or protocols",
            ],
            &["help", "ls", "cat", "wireshark", "tcpdump", "clear"],
            "Analyze traffic and identify data exfiltration",
        ),
        40 => Level::new(
            40,
            "Network Segmentation",
            "Implement network segmentation to improve security.",
            "Networking",
            &[
                "Design a segmented network",
                "Implement access controls between segments",
            ],
            &[
                "Create separate VLANs for different departments",
                "Configure firewall rules between segments",
                "Implement least privilege access controls",
            ],
            &["help", "ls", "cat", "vlan", "iptables", "clear"],
            "Implement network segmentation and access controls",
        ),
        41 => Level::new(
            41,
            "Symmetric Encryption",
            "Use symmetric encryption to secure sensitive data.",
            "Cryptography",
            &["Encrypt data with AES", "Decrypt the encrypted data"],
            &[
                "Use OpenSSL for encryption",
                "Generate a secure key",
                "Encrypt and decrypt a test message",
            ],
            &["help", "ls", "cat", "openssl", "clear"],
            "Encrypt and decrypt data with AES",
        ),
        42 => Level::new(
            42,
            "Asymmetric Encryption",
            "Use asymmetric encryption for secure communication.",
            "Cryptography",
            &[
                "Generate RSA key pair",
                "Encrypt with public key",
                "Decrypt with private key",
            ],
            &[
                "Use OpenSSL to generate RSA keys",
                "Encrypt a message with the public key",
                "Decrypt the message with the private key",
            ],
            &["help", "ls", "cat", "openssl", "clear"],
            "Use asymmetric encryption for secure communication",
        ),
        43 => Level::new(
            43,
            "Digital Signatures",
            "Create and verify digital signatures to ensure data integrity.",
            "Cryptography",
            &["Create a digital signature", "Verify the signature"],
            &[
                "Use OpenSSL to create a signature",
                "Sign a document with a private key",
                "Verify the signature with the public key",
            ],
            &["help", "ls", "cat", "openssl", "clear"],
            "Create and verify digital signatures",
        ),
        44 => Level::new(
            44,
            "Hash Functions",
            "Use hash functions to verify data integrity.",
            "Cryptography",
            &["Calculate file hashes", "Verify file integrity"],
            &[
                "Use 'sha256sum' to calculate hashes",
                "Compare hashes to verify integrity",
                "Check for hash collisions",
            ],
            &["help", "ls", "cat", "sha256sum", "clear"],
            "Calculate and verify file hashes",
        ),
        45 => Level::new(
            45,
            "Password Hashing",
            "Implement secure password hashing to protect user credentials.",
            "Cryptography",
            &["Hash passwords securely", "Verify password hashes"],
            &[
                "Use bcrypt or Argon2 for password hashing",
                "Include a salt to prevent rainbow table attacks",
                "Verify passwords by comparing hashes",
            ],
            &["help", "ls", "cat", "node", "clear"],
            "Implement secure password hashing",
        ),
        46 => Level::new(
            46,
            "Certificate Authority",
            "Set up a Certificate Authority (CA) to issue digital certificates.",
            "Cryptography",
            &["Create a root CA", "Issue certificates", "Verify certificates"],
            &[
                "Use OpenSSL to create a root CA",
                "Issue certificates signed by the CA",
                "Verify certificate chains",
            ],
            &["help", "ls", "cat", "openssl", "clear"],
            "Set up a CA and issue certificates",
        ),
        47 => Level::new(
            47,
            "Secure Key Exchange",
            "Implement Diffie-Hellman key exchange for secure communication.",
            "Cryptography",
            &["Generate Diffie-Hellman parameters", "Exchange keys securely"],
            &[
                "Use OpenSSL to generate DH parameters",
                "Exchange public keys",
                "Derive a shared secret",
            ],
            &["help", "ls", "cat", "openssl", "clear"],
            "Implement Diffie-Hellman key exchange",
        ),
        48 => Level::new(
            48,
            "Encrypted Communication",
            "Set up encrypted communication between two hosts.",
            "Cryptography",
            &["Configure TLS/SSL", "Test encrypted communication"],
            &[
                "Generate certificates for both hosts",
                "Configure TLS/SSL settings",
                "Test the encrypted connection",
            ],
            &["help", "ls", "cat", "openssl", "curl", "clear"],
            "Set up and test encrypted communication",
        ),
        49 => Level::new(
            49,
            "Cryptographic Attacks",
            "Understand and mitigate common cryptographic attacks.",
            "Cryptography",
            &[
                "Identify vulnerable cryptographic implementations",
                "Implement mitigations",
            ],
            &[
                "Look for weak algorithms (MD5, SHA1)",
                "Check for padding oracle vulnerabilities",
                "Implement secure algorithms and protocols",
            ],
            &["help", "ls", "cat", "analyze", "clear"],
            "Identify and mitigate cryptographic vulnerabilities",
        ),
        50 => Level::new(
            50,
            "Secure Random Number Generation",
            "Implement secure random number generation for cryptographic operations.",
            "Cryptography",
            &[
                "Generate cryptographically secure random numbers",
                "Test randomness",
            ],
            &[
                "Use /dev/urandom or crypto.randomBytes()",
                "Avoid Math.random() for security",
                "Test the randomness of the generated numbers",
            ],
            &["help", "ls", "cat", "node", "clear"],
            "Implement secure random number generation",
        ),
        51 => Level::new(
            51,
            "Buffer Overflow",
            "Exploit a buffer overflow vulnerability to execute arbitrary code.",
            "Advanced Exploits",
            &[
                "Identify a buffer overflow vulnerability",
                "Exploit it to execute code",
            ],
            &[
                "Look for unbounded input functions like gets() or strcpy()",
                "Craft an input that overflows the buffer",
                "Include shellcode to execute commands",
            ],
            &["help", "ls", "cat", "exploit", "clear"],
            "Exploit a buffer overflow vulnerability",
        ),
        52 => Level::new(
            52,
            "Format String Vulnerability",
            "Exploit a format string vulnerability to read memory.",
            "Advanced Exploits",
            &[
                "Identify a format string vulnerability",
                "Exploit it to read memory",
            ],
            &[
                "Look for printf(user_input) without format specifiers",
                "Use %x or %p to read from the stack",
                "Chain format specifiers to read specific memory addresses",
            ],
            &["help", "ls", "cat", "exploit", "clear"],
            "Exploit a format string vulnerability",
        ),
        53 => Level::new(
            53,
            "Race Condition",
            "Exploit a race condition to gain unauthorized access.",
            "Advanced Exploits",
            &["Identify a race condition", "Exploit it to gain access"],
            &[
                "Look for time-of-check to time-of-use (TOCTOU) bugs",
                "Create a script that exploits the timing window",
                "Execute the exploit to gain access",
            ],
            &["help", "ls", "cat", "exploit", "clear"],
            "Exploit a race condition",
        ),
        54 => Level::new(
            54,
            "Command Injection",
            "Exploit a command injection vulnerability to execute arbitrary commands.",
            "Advanced Exploits",
            &[
                "Identify a command injection vulnerability",
                "Execute arbitrary commands",
            ],
            &[
                "Look for user input passed to system() or exec()",
                "Use metacharacters like ; | & to inject commands",
                "Execute commands to gain access or read sensitive files",
            ],
            &["help", "ls", "cat", "exploit", "clear"],
            "Exploit a command injection vulnerability",
        ),
        55 => Level::new(
            55,
            "Privilege Escalation",
            "Escalate privileges from a regular user to root/administrator.",
            "Advanced Exploits",
            &[
                "Identify privilege escalation vectors",
                "Escalate to root privileges",
            ],
            &[
                "Look for SUID binaries",
                "Check for misconfigured sudo permissions",
                "Exploit kernel vulnerabilities",
            ],
            &["help", "ls", "cat", "sudo", "find", "clear"],
            "Escalate privileges to root",
        ),
        56 => Level::new(
            56,
            "Remote Code Execution",
            "Exploit a vulnerability to execute code on a remote system.",
            "Advanced Exploits",
            &[
                "Identify a remote code execution vulnerability",
                "Execute code remotely",
            ],
            &[
                "Look for vulnerable web applications or services",
                "Craft a payload to execute code",
                "Establish a reverse shell or command execution channel",
            ],
            &["help", "ls", "cat", "exploit", "curl", "clear"],
            "Execute code on a remote system",
        ),
        57 => Level::new(
            57,
            "Binary Exploitation",
            "Analyze and exploit a vulnerable binary.",
            "Advanced Exploits",
            &[
                "Analyze a binary for vulnerabilities",
                "Exploit the vulnerabilities",
            ],
            &[
                "Use tools like gdb, objdump, or radare2",
                "Look for memory corruption bugs",
                "Craft an exploit to gain control of execution",
            ],
            &["help", "ls", "cat", "gdb", "objdump", "clear"],
            "Exploit a vulnerable binary",
        ),
        58 => Level::new(
            58,
            "Memory Forensics",
            "Analyze a memory dump to find evidence of compromise.",
            "Advanced Exploits",
            &["Analyze a memory dump", "Find evidence of compromise"],
            &[
                "Use tools like Volatility",
                "Look for suspicious processes or network connections",
                "Extract credentials or malware artifacts",
            ],
            &["help", "ls", "cat", "strings", "clear"],
            "Analyze a memory dump and find evidence",
        ),
        59 => Level::new(
            59,
            "Ransomware Analysis",
            "Analyze ransomware to understand its behavior and find the decryption key.",
            "Advanced Exploits",
            &["Analyze ransomware behavior", "Find the decryption key"],
            &[
                "Use a sandbox environment for analysis",
                "Monitor file system and registry changes",
                "Look for the decryption key in memory or environment variables",
            ],
            &["help", "ls", "cat", "env", "strings", "clear"],
            "Analyze ransomware and find the decryption key",
        ),
        60 => Level::new(
            60,
            "Steganography",
            "Extract hidden information from files using steganography techniques.",
            "Advanced Exploits",
            &[
                "Identify files with hidden information",
                "Extract the hidden data",
            ],
            &[
                "Look for unusual patterns or metadata in files",
                "Use steganography tools to extract hidden data",
                "Check image, audio, or text files for hidden information",
            ],
            &["help", "ls", "cat", "strings", "clear"],
            "Extract hidden information from files",
        ),
        _ => Level::new(
            id,
            "Unknown Level",
            "This level has not been implemented yet.",
            "Unknown",
            &["No objectives defined"],
            &["No hints available"],
            &["help", "ls", "cat", "clear"],
            "Unknown",
        ),
    }
}
